use rand::Rng;

/// Length of the numeric participant id handed to the real-time-communication SDK.
const RTC_UID_LENGTH: usize = 6;

/// Generates a numeric RTC uid of exactly six digits. Leading zeros are kept.
pub fn rtc_uid() -> String {
    let mut rng = rand::rng();

    (0..RTC_UID_LENGTH)
        .map(|_| char::from(b'0' + rng.random_range(0..10u8)))
        .collect()
}
