//! Theme profile configuration for mdpdf.
//!
//! Resolves a named [`ThemeProfile`] from an INI file (`themes.ini` by
//! default). Every field starts from a built-in default and is overridden by
//! the keys found in the file, so resolution never yields a missing field.
//!
//! ## File format
//!
//! ```ini
//! [DEFAULT]
//! heading_line_color = #d1d9e0
//!
//! [Standard]
//! name = Institute of Electrical Engineering
//! university = Example University
//! accent_color = #00549f
//! logo_left = logos/iee.png
//! logo_right = logos/university.svg
//! ```
//!
//! Profile keys: `name`, `university`, `address`, `email`, `website`,
//! `slogan`, `accent_color`, `logo_left`, `logo_right`. The global
//! `heading_line_color` key is read from `[DEFAULT]` or from keys placed
//! before the first section header.

use std::path::{Path, PathBuf};

use ini::{Ini, Properties};

/// Name of the global section holding document-wide settings.
pub const DEFAULT_SECTION: &str = "DEFAULT";

/// Profile used when none is requested.
pub const DEFAULT_PROFILE: &str = "Standard";

/// Configuration filename used when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "themes.ini";

/// Heading underline color of the GitHub theme.
pub const DEFAULT_HEADING_LINE_COLOR: &str = "#d1d9e0";

/// Branding accent color used when a profile sets none.
pub const DEFAULT_ACCENT_COLOR: &str = "#0969da";

/// Resolved branding settings for a single profile.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ThemeProfile {
    /// Section name this profile was resolved for.
    pub profile: String,
    /// Institution name (first header line).
    pub name: String,
    /// Parent organization (second header line).
    pub university: String,
    /// Postal address shown in the footer.
    pub address: String,
    /// Contact email shown in the footer.
    pub email: String,
    /// Website shown in the footer.
    pub website: String,
    /// Slogan shown in italics on the right of the footer.
    pub slogan: String,
    /// Accent color for the branding stylesheet.
    pub accent_color: String,
    /// Color of the rule under `h1`/`h2`.
    pub heading_line_color: String,
    /// Logo shown on the left of the header.
    pub logo_left: PathBuf,
    /// Logo shown on the right of the header.
    pub logo_right: PathBuf,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error while reading an existing configuration file.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// Configuration file path.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },
    /// INI parsing error.
    #[error("Invalid theme configuration {}: {source}", path.display())]
    Parse {
        /// Configuration file path.
        path: PathBuf,
        /// Underlying error.
        source: ini::ParseError,
    },
}

impl ThemeProfile {
    /// Built-in profile values under the given profile name.
    #[must_use]
    pub fn defaults(profile: &str) -> Self {
        Self {
            profile: profile.to_owned(),
            name: "Institute of Electrical Engineering".to_owned(),
            university: "University".to_owned(),
            address: String::new(),
            email: String::new(),
            website: String::new(),
            slogan: String::new(),
            accent_color: DEFAULT_ACCENT_COLOR.to_owned(),
            heading_line_color: DEFAULT_HEADING_LINE_COLOR.to_owned(),
            logo_left: PathBuf::from("logo_left.png"),
            logo_right: PathBuf::from("logo_right.png"),
        }
    }

    /// Resolve a profile from a configuration file.
    ///
    /// A missing file is not an error: the built-in defaults are returned
    /// under the requested name. The same happens when the file exists but
    /// has no section for `profile`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file exists but cannot be read and
    /// [`ConfigError::Parse`] if it is not valid INI.
    pub fn resolve(profile: &str, config_path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(config_path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(
                    path = %config_path.display(),
                    "Theme configuration not found, using defaults"
                );
                return Ok(Self::defaults(profile));
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: config_path.to_path_buf(),
                    source,
                });
            }
        };

        let ini = Ini::load_from_str(&content).map_err(|source| ConfigError::Parse {
            path: config_path.to_path_buf(),
            source,
        })?;

        Ok(Self::from_ini(profile, &ini))
    }

    /// Merge a parsed INI document over the built-in defaults.
    ///
    /// Order: defaults, then the global section, then the profile section.
    #[must_use]
    pub fn from_ini(profile: &str, ini: &Ini) -> Self {
        let mut theme = Self::defaults(profile);

        if let Some(global) = global_section(ini) {
            theme.apply_global(global);
        }

        match ini.section(Some(profile)) {
            Some(section) => theme.apply_profile(section),
            None => tracing::debug!(profile, "Theme profile not found, using defaults"),
        }

        theme
    }

    /// Directory used to resolve relative logo paths.
    ///
    /// Logos are looked up next to the configuration file that names them.
    #[must_use]
    pub fn base_dir(config_path: &Path) -> PathBuf {
        match config_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    fn apply_global(&mut self, section: &Properties) {
        for (key, value) in section.iter() {
            if key.eq_ignore_ascii_case("heading_line_color") {
                value.clone_into(&mut self.heading_line_color);
            }
        }
    }

    fn apply_profile(&mut self, section: &Properties) {
        for (key, value) in section.iter() {
            match key.to_ascii_lowercase().as_str() {
                "name" => value.clone_into(&mut self.name),
                "university" => value.clone_into(&mut self.university),
                "address" => value.clone_into(&mut self.address),
                "email" => value.clone_into(&mut self.email),
                "website" => value.clone_into(&mut self.website),
                "slogan" => value.clone_into(&mut self.slogan),
                "accent_color" => value.clone_into(&mut self.accent_color),
                "logo_left" => self.logo_left = PathBuf::from(value),
                "logo_right" => self.logo_right = PathBuf::from(value),
                _ => tracing::debug!(profile = %self.profile, key, "Ignoring unknown theme key"),
            }
        }
    }
}

impl Default for ThemeProfile {
    fn default() -> Self {
        Self::defaults(DEFAULT_PROFILE)
    }
}

/// `[DEFAULT]` if present, otherwise the keys before the first section.
fn global_section(ini: &Ini) -> Option<&Properties> {
    ini.section(Some(DEFAULT_SECTION))
        .or_else(|| ini.section(None::<String>))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn parse(content: &str) -> Ini {
        Ini::load_from_str(content).unwrap()
    }

    #[test]
    fn test_defaults_populate_every_field() {
        let theme = ThemeProfile::defaults("Custom");

        assert_eq!(theme.profile, "Custom");
        assert_eq!(theme.name, "Institute of Electrical Engineering");
        assert_eq!(theme.university, "University");
        assert_eq!(theme.accent_color, DEFAULT_ACCENT_COLOR);
        assert_eq!(theme.heading_line_color, DEFAULT_HEADING_LINE_COLOR);
        assert_eq!(theme.logo_left, PathBuf::from("logo_left.png"));
        assert_eq!(theme.logo_right, PathBuf::from("logo_right.png"));
    }

    #[test]
    fn test_default_impl_uses_standard_profile() {
        assert_eq!(ThemeProfile::default().profile, DEFAULT_PROFILE);
    }

    #[test]
    fn test_resolve_missing_file_returns_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("themes.ini");

        let theme = ThemeProfile::resolve("Anything", &path).unwrap();

        assert_eq!(theme, ThemeProfile::defaults("Anything"));
    }

    #[test]
    fn test_resolve_missing_section_returns_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("themes.ini");
        std::fs::write(&path, "[Other]\nname = Other Institute\n").unwrap();

        let theme = ThemeProfile::resolve("Standard", &path).unwrap();

        assert_eq!(theme, ThemeProfile::defaults("Standard"));
    }

    #[test]
    fn test_resolve_overrides_only_present_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("themes.ini");
        std::fs::write(
            &path,
            "[Standard]\nname = Power Systems Lab\naccent_color = #00549f\nlogo_left = logos/lab.svg\n",
        )
        .unwrap();

        let theme = ThemeProfile::resolve("Standard", &path).unwrap();

        let expected = ThemeProfile {
            name: "Power Systems Lab".to_owned(),
            accent_color: "#00549f".to_owned(),
            logo_left: PathBuf::from("logos/lab.svg"),
            ..ThemeProfile::defaults("Standard")
        };
        assert_eq!(theme, expected);
    }

    #[test]
    fn test_resolve_invalid_ini_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("themes.ini");
        std::fs::write(&path, "[Standard\nname = broken\n").unwrap();

        let err = ThemeProfile::resolve("Standard", &path).unwrap_err();

        assert!(
            matches!(err, ConfigError::Parse { .. }),
            "Expected ConfigError::Parse, got {err:?}"
        );
    }

    #[test]
    fn test_resolve_directory_is_io_error() {
        let dir = TempDir::new().unwrap();

        let err = ThemeProfile::resolve("Standard", dir.path()).unwrap_err();

        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("Failed to read"));
    }

    #[test]
    fn test_from_ini_all_profile_keys() {
        let ini = parse(
            r"
[IEE]
name = Institute of Electrical Engineering
university = Example University
address = 1 Example Street, Example City
email = office@example.edu
website = www.example.edu
slogan = Engineering the future
accent_color = #00549f
logo_left = left.png
logo_right = right.jpg
",
        );

        let theme = ThemeProfile::from_ini("IEE", &ini);

        assert_eq!(theme.university, "Example University");
        assert_eq!(theme.address, "1 Example Street, Example City");
        assert_eq!(theme.email, "office@example.edu");
        assert_eq!(theme.website, "www.example.edu");
        assert_eq!(theme.slogan, "Engineering the future");
        assert_eq!(theme.accent_color, "#00549f");
        assert_eq!(theme.logo_left, PathBuf::from("left.png"));
        assert_eq!(theme.logo_right, PathBuf::from("right.jpg"));
        assert_eq!(theme.heading_line_color, DEFAULT_HEADING_LINE_COLOR);
    }

    #[test]
    fn test_from_ini_unknown_keys_ignored() {
        let ini = parse("[Standard]\nfont = Comic Sans\nname = Lab\n");

        let theme = ThemeProfile::from_ini("Standard", &ini);

        assert_eq!(
            theme,
            ThemeProfile {
                name: "Lab".to_owned(),
                ..ThemeProfile::defaults("Standard")
            }
        );
    }

    #[test]
    fn test_from_ini_keys_case_insensitive() {
        let ini = parse("[Standard]\nAccent_Color = #123456\n");

        let theme = ThemeProfile::from_ini("Standard", &ini);

        assert_eq!(theme.accent_color, "#123456");
    }

    #[test]
    fn test_global_heading_color_without_profile_section() {
        let ini = parse("[DEFAULT]\nheading_line_color = #ff0000\n");

        let theme = ThemeProfile::from_ini("Standard", &ini);

        assert_eq!(theme.heading_line_color, "#ff0000");
        assert_eq!(theme.name, "Institute of Electrical Engineering");
    }

    #[test]
    fn test_global_heading_color_before_first_section() {
        let ini = parse("heading_line_color = #00ff00\n\n[Standard]\nname = Lab\n");

        let theme = ThemeProfile::from_ini("Standard", &ini);

        assert_eq!(theme.heading_line_color, "#00ff00");
        assert_eq!(theme.name, "Lab");
    }

    #[test]
    fn test_profile_cannot_set_heading_color() {
        let ini = parse("[Standard]\nheading_line_color = #000000\n");

        let theme = ThemeProfile::from_ini("Standard", &ini);

        assert_eq!(theme.heading_line_color, DEFAULT_HEADING_LINE_COLOR);
    }

    #[test]
    fn test_base_dir_is_config_parent() {
        assert_eq!(
            ThemeProfile::base_dir(Path::new("/etc/mdpdf/themes.ini")),
            PathBuf::from("/etc/mdpdf")
        );
    }

    #[test]
    fn test_base_dir_bare_filename_is_cwd() {
        assert_eq!(
            ThemeProfile::base_dir(Path::new("themes.ini")),
            PathBuf::from(".")
        );
    }
}
