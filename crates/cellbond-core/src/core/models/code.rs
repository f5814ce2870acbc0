use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodeError {
    #[error("Structure code is empty")]
    Empty,
    #[error("Structure code '{code}' has a non-digit character '{found}' at position {position}")]
    InvalidDigit {
        code: String,
        position: usize,
        found: char,
    },
}

/// What a structure-code digit says about the substituent on its base site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attachment {
    /// Digit `0`: the site carries no substituent.
    None,
    /// Digit `1`: substituent above the carbon plane.
    Above,
    /// Digit `2`: substituent below the carbon plane.
    Below,
    /// Digits `3`-`9`: a substituent without a recorded side.
    Unspecified(u8),
}

impl Attachment {
    fn from_digit(digit: u8) -> Self {
        match digit {
            0 => Attachment::None,
            1 => Attachment::Above,
            2 => Attachment::Below,
            d => Attachment::Unspecified(d),
        }
    }

    pub fn is_attached(self) -> bool {
        self != Attachment::None
    }
}

/// Identifies one member of the cell family: one digit per base site, in site order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StructureCode {
    text: String,
    sites: Vec<Attachment>,
}

/// Species counts implied by a structure code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Composition {
    pub base_sites: usize,
    pub substituents: usize,
    pub above: usize,
    pub below: usize,
}

impl StructureCode {
    pub fn parse(text: &str) -> Result<Self, CodeError> {
        if text.is_empty() {
            return Err(CodeError::Empty);
        }
        let sites = text
            .chars()
            .enumerate()
            .map(|(position, c)| {
                c.to_digit(10)
                    .map(|d| Attachment::from_digit(d as u8))
                    .ok_or_else(|| CodeError::InvalidDigit {
                        code: text.to_string(),
                        position,
                        found: c,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            text: text.to_string(),
            sites,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of base sites the code describes.
    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    pub fn sites(&self) -> &[Attachment] {
        &self.sites
    }

    /// Base-site indices carrying a substituent, in code order.
    pub fn attached_sites(&self) -> impl Iterator<Item = usize> + '_ {
        self.sites
            .iter()
            .enumerate()
            .filter(|(_, a)| a.is_attached())
            .map(|(i, _)| i)
    }

    pub fn substituent_count(&self) -> usize {
        self.attached_sites().count()
    }

    pub fn composition(&self) -> Composition {
        let count = |wanted: Attachment| self.sites.iter().filter(|&&a| a == wanted).count();
        Composition {
            base_sites: self.sites.len(),
            substituents: self.substituent_count(),
            above: count(Attachment::Above),
            below: count(Attachment::Below),
        }
    }
}

impl FromStr for StructureCode {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for StructureCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_maps_digits_to_attachments() {
        let code = StructureCode::parse("0127").unwrap();
        assert_eq!(
            code.sites(),
            [
                Attachment::None,
                Attachment::Above,
                Attachment::Below,
                Attachment::Unspecified(7)
            ]
        );
        assert_eq!(code.len(), 4);
        assert_eq!(code.as_str(), "0127");
        assert_eq!(code.to_string(), "0127");
    }

    #[test]
    fn substituent_count_is_the_number_of_nonzero_digits() {
        assert_eq!(StructureCode::parse("0000").unwrap().substituent_count(), 0);
        assert_eq!(StructureCode::parse("1000").unwrap().substituent_count(), 1);
        assert_eq!(StructureCode::parse("1122").unwrap().substituent_count(), 4);
        assert_eq!(StructureCode::parse("0309").unwrap().substituent_count(), 2);
    }

    #[test]
    fn attached_sites_are_in_code_order() {
        let code = StructureCode::parse("0201").unwrap();
        assert_eq!(code.attached_sites().collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn composition_splits_above_and_below() {
        let composition = StructureCode::parse("1122").unwrap().composition();
        assert_eq!(
            composition,
            Composition {
                base_sites: 4,
                substituents: 4,
                above: 2,
                below: 2
            }
        );
    }

    #[test]
    fn parse_rejects_empty_and_non_digit_codes() {
        assert_eq!(StructureCode::parse(""), Err(CodeError::Empty));
        assert_eq!(
            "10a0".parse::<StructureCode>(),
            Err(CodeError::InvalidDigit {
                code: "10a0".into(),
                position: 2,
                found: 'a'
            })
        );
    }
}
