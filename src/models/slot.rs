/// The fixed half-hour time slots offered for booking, 09:00 through 17:30.
///
/// Only the client-side form checks membership; the server accepts any
/// `time` string as given.
pub const TIME_SLOTS: [&str; 18] = [
    "09:00", "09:30", "10:00", "10:30", "11:00", "11:30", "12:00", "12:30", "13:00", "13:30",
    "14:00", "14:30", "15:00", "15:30", "16:00", "16:30", "17:00", "17:30",
];

pub fn is_valid(token: &str) -> bool {
    TIME_SLOTS.contains(&token)
}
