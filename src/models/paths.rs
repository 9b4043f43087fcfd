use camino::{Utf8Path, Utf8PathBuf};

macro_rules! define_paths {
    ($name:ident { $($field:ident : $default:expr),* $(,)? }) => {
        #[derive(Clone, Debug)]
        pub struct $name {
            $(pub $field: Utf8PathBuf,)*
        }

        impl $name {
            pub fn to_absolute(mut self, base: &Utf8Path) -> Self {
                $(self.$field = base.join(self.$field);)*
                self
            }

            pub fn new(base: &Utf8Path) -> Self {
                Self::default().to_absolute(base)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    $($field: $default.into(),)*
                }
            }
        }
    };
}

define_paths!(ModPaths {
    module_info: "module.json",
    packet_manifest: "manifest.json",
    config: "module.config.json",
});

/// Candidate readme names, compared against lowercased directory entries.
pub const README_FILE_NAMES: [&str; 4] = [
    "readme.md",
    "readme.txt",
    "instructions.txt",
    "instructions.md",
];

pub const STANDALONE_EXTENSION: &str = ".js";
