use crate::foundation::error::{ScrollcueError, ScrollcueResult};

/// Supported page languages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    #[default]
    En,
    Ar,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Ar];

    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ar => "ar",
        }
    }

    pub fn direction(self) -> TextDirection {
        match self {
            Self::En => TextDirection::Ltr,
            Self::Ar => TextDirection::Rtl,
        }
    }

    /// Label of the switch button, written in the language it switches to.
    pub fn switch_label(self) -> &'static str {
        match self {
            Self::En => "العربية",
            Self::Ar => "English",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Self::En => Self::Ar,
            Self::Ar => Self::En,
        }
    }

    /// Rewrite `path` for the other locale: `/en/services` becomes `/ar/services`.
    ///
    /// A leading locale segment is stripped only when it is a whole segment, so `/english`
    /// stays intact.
    pub fn switch_path(self, path: &str) -> String {
        let rest = Self::ALL
            .iter()
            .find_map(|l| {
                let tail = path.strip_prefix('/')?.strip_prefix(l.code())?;
                (tail.is_empty() || tail.starts_with('/')).then_some(tail)
            })
            .unwrap_or(path);
        let rest = if rest == "/" { "" } else { rest };
        format!("/{}{}", self.toggle().code(), rest)
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Locale {
    type Err = ScrollcueError;

    fn from_str(s: &str) -> ScrollcueResult<Self> {
        Self::ALL
            .into_iter()
            .find(|l| l.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ScrollcueError::validation(format!("unsupported locale '{s}'")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/site/locale.rs"]
mod tests;
