use crate::error::Error;
use crate::guests::ExcludedGuest;
use crate::treats::{default_treats, Treat};
use serde_derive::Deserialize;

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub party: Party,
    pub session: SessionSettings,
    pub excluded_guest: ExcludedGuest,
    pub treats: Vec<Treat>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            host: "127.0.0.1".to_owned(),
            port: 5000,
            party: Party::default(),
            session: SessionSettings::default(),
            excluded_guest: ExcludedGuest::default(),
            treats: default_treats(),
        }
    }
}

impl Settings {
    /// Reads `path` (any format the config crate understands, extension
    /// optional) if it exists, then applies `PARTY_*` environment overrides.
    pub fn load(path: &str) -> Result<Settings, Error> {
        let mut settings = config::Config::default();
        settings.merge(config::File::with_name(path).required(false))?;
        settings.merge(config::Environment::with_prefix("PARTY"))?;
        Ok(settings.try_into::<Settings>()?)
    }

    pub fn listen_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Party {
    pub title: String,
    pub host: String,
    pub when: String,
    pub location: String,
}

impl Default for Party {
    fn default() -> Self {
        Party {
            title: "Balloonicorn's Party".to_owned(),
            host: "Balloonicorn".to_owned(),
            when: "Saturday, 8pm until the balloons run out".to_owned(),
            location: "The Rainbow Room".to_owned(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    pub cookie_name: String,
    /// Only send the session cookie over HTTPS. Turn off for local development.
    pub secure: bool,
}

impl Default for SessionSettings {
    fn default() -> Self {
        SessionSettings {
            cookie_name: "_party_session".to_owned(),
            secure: false,
        }
    }
}
