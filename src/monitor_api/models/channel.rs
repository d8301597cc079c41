/// Maps a Wi-Fi centre frequency in MHz to its channel number.
///
/// Only the channels the monitoring app knows about are listed; any other
/// frequency yields `None`.
pub fn channel_for_frequency(freq_mhz: i32) -> Option<i32> {
    match freq_mhz {
        2001..3000 => channel_2400_mhz(freq_mhz),
        4901..5900 => channel_5000_mhz(freq_mhz),
        _ => None,
    }
}

fn channel_2400_mhz(freq_mhz: i32) -> Option<i32> {
    match freq_mhz {
        // Channel 14 sits outside the 5 MHz raster.
        2484 => Some(14),
        2412..=2472 if (freq_mhz - 2412) % 5 == 0 => Some((freq_mhz - 2407) / 5),
        _ => None,
    }
}

fn channel_5000_mhz(freq_mhz: i32) -> Option<i32> {
    match freq_mhz {
        5180..=5320 | 5500..=5680 if (freq_mhz - 5180) % 20 == 0 => Some((freq_mhz - 5000) / 5),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_2_4_ghz_channels() {
        assert_eq!(channel_for_frequency(2412), Some(1));
        assert_eq!(channel_for_frequency(2437), Some(6));
        assert_eq!(channel_for_frequency(2472), Some(13));
        assert_eq!(channel_for_frequency(2484), Some(14));
        assert_eq!(channel_for_frequency(2413), None);
    }

    #[test]
    fn maps_5_ghz_channels() {
        assert_eq!(channel_for_frequency(5180), Some(36));
        assert_eq!(channel_for_frequency(5320), Some(64));
        assert_eq!(channel_for_frequency(5500), Some(100));
        assert_eq!(channel_for_frequency(5680), Some(136));
        // UNII-2e gap and UNII-3 are not tracked.
        assert_eq!(channel_for_frequency(5400), None);
        assert_eq!(channel_for_frequency(5745), None);
    }

    #[test]
    fn out_of_band_frequencies_have_no_channel() {
        assert_eq!(channel_for_frequency(0), None);
        assert_eq!(channel_for_frequency(-127), None);
        assert_eq!(channel_for_frequency(60480), None);
    }
}
