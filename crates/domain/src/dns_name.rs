use crate::DomainError;
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

/// The reserved `*` label.
pub const WILDCARD_LABEL: &[u8] = b"*";

pub const MAX_LABEL_LEN: usize = 63;

/// Wire length limit, counting one length octet per label and the root octet.
pub const MAX_NAME_LEN: usize = 255;

/// One component of a domain name. Bytes are opaque; case folding is left to the codec.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Label(Box<[u8]>);

impl Label {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DomainError> {
        if bytes.is_empty() {
            return Err(DomainError::InvalidDomainName("empty label".to_string()));
        }
        if bytes.len() > MAX_LABEL_LEN {
            return Err(DomainError::InvalidDomainName(format!(
                "label exceeds {} bytes: {}",
                MAX_LABEL_LEN,
                String::from_utf8_lossy(bytes)
            )));
        }
        Ok(Self(bytes.into()))
    }

    pub fn wildcard() -> Self {
        Self(WILDCARD_LABEL.into())
    }

    #[inline]
    pub fn is_wildcard(&self) -> bool {
        &*self.0 == WILDCARD_LABEL
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.0))
    }
}

/// A domain name as an ordered label sequence, most specific label first.
///
/// The empty sequence is the root. The textual form joins labels with `.`
/// and never carries a trailing dot, so the root formats as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DomainName {
    labels: SmallVec<[Label; 6]>,
}

impl DomainName {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn from_labels<I, L>(labels: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = L>,
        L: AsRef<[u8]>,
    {
        let labels = labels
            .into_iter()
            .map(|l| Label::from_bytes(l.as_ref()))
            .collect::<Result<SmallVec<[Label; 6]>, _>>()?;

        let name = Self { labels };
        if name.wire_len() > MAX_NAME_LEN {
            return Err(DomainError::InvalidDomainName(format!(
                "name exceeds {} bytes: {}",
                MAX_NAME_LEN, name
            )));
        }
        Ok(name)
    }

    /// Builds a name from a compile-time literal without length checks.
    pub(crate) fn from_static(name: &str) -> Self {
        Self {
            labels: name
                .split('.')
                .filter(|l| !l.is_empty())
                .map(|l| Label(l.as_bytes().into()))
                .collect(),
        }
    }

    pub(crate) fn from_label_slice(labels: &[Label]) -> Self {
        Self {
            labels: labels.iter().cloned().collect(),
        }
    }

    #[inline]
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    #[inline]
    pub fn label_count(&self) -> usize {
        self.labels.len()
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.labels.is_empty()
    }

    /// True if any label, not only the first, is `*`.
    pub fn has_wildcard(&self) -> bool {
        self.labels.iter().any(Label::is_wildcard)
    }

    /// True if the first label is `*`.
    pub fn is_wildcard(&self) -> bool {
        self.labels.first().is_some_and(Label::is_wildcard)
    }

    /// The last `count` labels. Returns the whole name when it has fewer.
    pub fn suffix(&self, count: usize) -> Self {
        let skip = self.labels.len().saturating_sub(count);
        Self::from_label_slice(&self.labels[skip..])
    }

    pub fn wire_len(&self) -> usize {
        self.labels.iter().map(|l| l.len() + 1).sum::<usize>() + 1
    }

    pub fn is_subdomain_of(&self, other: &DomainName) -> bool {
        self.labels.len() >= other.labels.len() && self.labels.ends_with(&other.labels)
    }
}

impl FromStr for DomainName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.strip_suffix('.').unwrap_or(s);
        if trimmed.is_empty() {
            return Ok(Self::root());
        }

        Self::from_labels(trimmed.split('.')).map_err(|e| match e {
            DomainError::InvalidDomainName(reason) => {
                DomainError::InvalidDomainName(format!("{}: {}", s, reason))
            }
            other => other,
        })
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, label) in self.labels.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", label)?;
        }
        Ok(())
    }
}
