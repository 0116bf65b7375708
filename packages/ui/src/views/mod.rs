mod match_notification;
pub use match_notification::MatchNotification;

mod profile_card;
pub use profile_card::ProfileCard;

mod status;
pub use status::{ErrorPanel, NoMoreProfiles, Spinner};
