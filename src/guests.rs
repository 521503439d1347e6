use serde_derive::Deserialize;

/// The one person who doesn't get to RSVP.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ExcludedGuest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Used when telling them the bad news.
    pub display_name: String,
}

impl Default for ExcludedGuest {
    fn default() -> Self {
        ExcludedGuest {
            first_name: "mel".to_owned(),
            last_name: "melitpolski".to_owned(),
            email: "mel@ubermelon.com".to_owned(),
            display_name: "Mel".to_owned(),
        }
    }
}

impl ExcludedGuest {
    /// Deliberately loose: a matching first name is enough on its own, as is
    /// a matching email. Comparisons ignore case and surrounding whitespace.
    pub fn matches(&self, name: &str, email: &str) -> bool {
        let name = name.to_lowercase();
        let mut names = name.split_whitespace();
        let first = names.next();
        let second = names.next();

        let first_name_matches = first == Some(self.first_name.to_lowercase().as_str());
        let full_name_matches =
            first_name_matches && second == Some(self.last_name.to_lowercase().as_str());
        let email = email.trim().to_lowercase();
        let email_matches = !email.is_empty() && email == self.email.trim().to_lowercase();

        first_name_matches || full_name_matches || email_matches
    }
}
