use anyhow::{Context, Result};
use regex::{Regex, RegexBuilder};

/// Built-in (expression, label) table. Overlapping entries are intentional:
/// every matching expression contributes its label.
const CAPABILITY_MAP: &[(&str, &str)] = &[
    (r"build", "build"),
    (
        r"build.*platform|BUILDAPPSFORALLPLATFORMS",
        "build-all-platforms",
    ),
    (r"qcity", "qcity"),
    (r"runner|runners|runnersengine", "runner-engine"),
    (r"android|apk|play", "android-build"),
    (r"ios|ipa|xcode", "ios-build"),
    (r"mac|dmg|pkg", "macos-build"),
    (r"windows|nsis|exe", "windows-build"),
    (r"linux|deb|appimage", "linux-build"),
    (r"electron", "electron-build"),
    (r"video|media", "media-processing"),
    (r"gpu|cuda", "gpu"),
];

pub struct CapabilityPattern {
    regex: Regex,
    label: &'static str,
}

impl CapabilityPattern {
    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn is_match(&self, haystack: &str) -> bool {
        self.regex.is_match(haystack)
    }
}

/// Compiled capability table, evaluated in declaration order.
pub struct CapabilityTable {
    patterns: Vec<CapabilityPattern>,
}

impl CapabilityTable {
    pub fn builtin() -> Result<Self> {
        let patterns = CAPABILITY_MAP
            .iter()
            .map(|&(pattern, label)| {
                Ok(CapabilityPattern {
                    regex: compile_regex(pattern, label)?,
                    label,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    /// Labels whose expression matches `haystack`, in table order.
    pub fn matching_labels<'a>(
        &'a self,
        haystack: &'a str,
    ) -> impl Iterator<Item = &'static str> + 'a {
        self.patterns
            .iter()
            .filter(move |pattern| pattern.is_match(haystack))
            .map(CapabilityPattern::label)
    }
}

fn compile_regex(pattern: &str, label: &str) -> Result<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .with_context(|| format!("invalid capability regex for {label}"))
}
