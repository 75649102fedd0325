use serde_derive::Deserialize;
use serde_derive::Serialize;

use super::Role;
use crate::configuration::Config;
use crate::configuration::ConfigKey;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Author {
    User,
    Investor,
    Angel,
}

impl ToString for Author {
    fn to_string(&self) -> String {
        match self {
            Author::User => return Config::get(ConfigKey::Username),
            Author::Investor => return String::from("Investor"),
            Author::Angel => return String::from("Angel"),
        }
    }
}

impl From<Role> for Author {
    fn from(role: Role) -> Author {
        match role {
            Role::User => return Author::User,
            Role::Assistant => return Author::Investor,
        }
    }
}
