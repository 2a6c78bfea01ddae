//! Academic term labels such as "Fall 2025"

use crate::error::{FacprefError, Result};

/// Calendar seasons with a defined position inside an academic year
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Season {
    Spring = 1,
    Summer = 2,
    Fall = 3,
}

impl Season {
    /// Look up a season by its exact label; anything else has no defined order
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Spring" => Some(Season::Spring),
            "Summer" => Some(Season::Summer),
            "Fall" => Some(Season::Fall),
            _ => None,
        }
    }

    /// Rank within the year: Spring=1, Summer=2, Fall=3
    pub fn order(self) -> u8 {
        self as u8
    }
}

/// A term label split into season name and year
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    pub name: String,
    pub year: i32,
}

impl Term {
    /// Parse `"<name> <year>"`. The label must hold exactly two whitespace-separated tokens.
    pub fn parse(label: &str) -> Result<Self> {
        let mut parts = label.split_whitespace();
        let (name, year) = match (parts.next(), parts.next(), parts.next()) {
            (Some(name), Some(year), None) => (name, year),
            _ => {
                return Err(FacprefError::MalformedTermLabel {
                    label: label.to_string(),
                })
            }
        };

        let year = year
            .parse::<i32>()
            .map_err(|_| FacprefError::InvalidTermYear {
                label: label.to_string(),
                year: year.to_string(),
            })?;

        Ok(Term {
            name: name.to_string(),
            year,
        })
    }

    /// Order of the season, `None` for names outside Spring/Summer/Fall
    pub fn order(&self) -> Option<u8> {
        Season::from_name(&self.name).map(Season::order)
    }
}
