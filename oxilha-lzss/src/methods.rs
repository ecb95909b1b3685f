//! LHA compression method tags.
//!
//! Every entry header carries a 5-byte ASCII tag such as `-lh5-`. Tags
//! beginning with `-lh` or `-lz` belong to the LHA family; anything else is
//! not an LHA header at all.

/// Prefixes that identify an LHA-family method tag.
const RECOGNIZED_PREFIXES: [&[u8; 3]; 2] = [b"-lh", b"-lz"];

/// LHA compression method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum LhaMethod {
    /// lh0: Stored (no compression).
    #[default]
    Lh0,
    /// lh1: 4KB window, bit-flag LZSS.
    Lh1,
    /// lh4: 4KB dictionary, decoded with the 8KB flag-byte routine.
    Lh4,
    /// lh5: 8KB dictionary, decoded with the 8KB flag-byte routine.
    Lh5,
    /// lh6: 32KB dictionary, decoded with the 8KB flag-byte routine.
    Lh6,
    /// lh7: 64KB dictionary, decoded with the 8KB flag-byte routine.
    Lh7,
    /// lhd: Directory entry, no payload.
    Lhd,
    /// Recognized LHA-family tag without a decoder; payload passes through.
    Unknown([u8; 5]),
}

impl LhaMethod {
    /// Parse method from the 5-byte method ID.
    ///
    /// Returns `None` when the tag does not start with an LHA-family prefix.
    pub fn from_id(id: &[u8]) -> Option<Self> {
        let tag: [u8; 5] = id.try_into().ok()?;

        if !RECOGNIZED_PREFIXES
            .iter()
            .any(|prefix| tag.starts_with(&prefix[..]))
        {
            return None;
        }

        Some(match &tag {
            b"-lh0-" => Self::Lh0,
            b"-lh1-" => Self::Lh1,
            b"-lh4-" => Self::Lh4,
            b"-lh5-" => Self::Lh5,
            b"-lh6-" => Self::Lh6,
            b"-lh7-" => Self::Lh7,
            b"-lhd-" => Self::Lhd,
            _ => Self::Unknown(tag),
        })
    }

    /// Get the method ID.
    pub fn id(&self) -> [u8; 5] {
        match self {
            Self::Lh0 => *b"-lh0-",
            Self::Lh1 => *b"-lh1-",
            Self::Lh4 => *b"-lh4-",
            Self::Lh5 => *b"-lh5-",
            Self::Lh6 => *b"-lh6-",
            Self::Lh7 => *b"-lh7-",
            Self::Lhd => *b"-lhd-",
            Self::Unknown(tag) => *tag,
        }
    }

    /// Dictionary size the tag nominally declares, in bytes.
    ///
    /// This is metadata only: `lh4`-`lh7` are all decoded with an 8KB window.
    pub fn dictionary_size(&self) -> usize {
        match self {
            Self::Lh0 | Self::Lhd | Self::Unknown(_) => 0,
            Self::Lh1 => 4096,
            Self::Lh4 => 4096,
            Self::Lh5 => 8192,
            Self::Lh6 => 32768,
            Self::Lh7 => 65536,
        }
    }

    /// Check if this method is stored (no compression).
    pub fn is_stored(&self) -> bool {
        matches!(self, Self::Lh0)
    }

    /// Check if this tag marks a directory entry.
    pub fn is_directory(&self) -> bool {
        matches!(self, Self::Lhd)
    }

    /// Check if a decoder exists for this method.
    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }

    /// Get the method name.
    pub fn name(&self) -> String {
        match self {
            Self::Lh0 => "lh0".into(),
            Self::Lh1 => "lh1".into(),
            Self::Lh4 => "lh4".into(),
            Self::Lh5 => "lh5".into(),
            Self::Lh6 => "lh6".into(),
            Self::Lh7 => "lh7".into(),
            Self::Lhd => "lhd".into(),
            Self::Unknown(tag) => String::from_utf8_lossy(&tag[1..4]).into_owned(),
        }
    }
}

impl std::fmt::Display for LhaMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_from_id() {
        assert_eq!(LhaMethod::from_id(b"-lh0-"), Some(LhaMethod::Lh0));
        assert_eq!(LhaMethod::from_id(b"-lh1-"), Some(LhaMethod::Lh1));
        assert_eq!(LhaMethod::from_id(b"-lh5-"), Some(LhaMethod::Lh5));
        assert_eq!(LhaMethod::from_id(b"-lh7-"), Some(LhaMethod::Lh7));
        assert_eq!(LhaMethod::from_id(b"-lhd-"), Some(LhaMethod::Lhd));
    }

    #[test]
    fn test_unknown_family_tags() {
        assert_eq!(
            LhaMethod::from_id(b"-lz5-"),
            Some(LhaMethod::Unknown(*b"-lz5-"))
        );
        assert_eq!(
            LhaMethod::from_id(b"-lh2-"),
            Some(LhaMethod::Unknown(*b"-lh2-"))
        );
        assert_eq!(LhaMethod::from_id(b"-lz5-").map(|m| m.name()), Some("lz5".into()));
    }

    #[test]
    fn test_rejected_tags() {
        assert_eq!(LhaMethod::from_id(b"-xxx-"), None);
        assert_eq!(LhaMethod::from_id(b"PK\x03\x04\x14"), None);
        assert_eq!(LhaMethod::from_id(b"-lh5"), None);
        assert_eq!(LhaMethod::from_id(b""), None);
    }

    #[test]
    fn test_id_roundtrip() {
        for method in [
            LhaMethod::Lh0,
            LhaMethod::Lh1,
            LhaMethod::Lh4,
            LhaMethod::Lh5,
            LhaMethod::Lh6,
            LhaMethod::Lh7,
            LhaMethod::Lhd,
            LhaMethod::Unknown(*b"-lzs-"),
        ] {
            assert_eq!(LhaMethod::from_id(&method.id()), Some(method));
        }
    }

    #[test]
    fn test_dictionary_sizes() {
        assert_eq!(LhaMethod::Lh1.dictionary_size(), 4096);
        assert_eq!(LhaMethod::Lh5.dictionary_size(), 8192);
        assert_eq!(LhaMethod::Lh6.dictionary_size(), 32768);
        assert_eq!(LhaMethod::Lh7.dictionary_size(), 65536);
        assert_eq!(LhaMethod::Lhd.dictionary_size(), 0);
    }

    #[test]
    fn test_flags_and_display() {
        assert!(LhaMethod::Lh0.is_stored());
        assert!(LhaMethod::Lhd.is_directory());
        assert!(!LhaMethod::Unknown(*b"-lh3-").is_supported());
        assert_eq!(LhaMethod::Lh5.to_string(), "lh5");
    }
}
