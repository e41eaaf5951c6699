use std::fmt;

use crate::configuration::Config;
use crate::configuration::ConfigKey;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Author {
    User,
    Bot,
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Author::User => {
                let username = Config::get(ConfigKey::Username);
                if username.is_empty() {
                    return write!(f, "You");
                }
                return write!(f, "{username}");
            }
            Author::Bot => return write!(f, "Safechat"),
        }
    }
}
