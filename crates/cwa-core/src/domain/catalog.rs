//! Framework and variant catalog.
//!
//! # Design
//!
//! A single static registry describes every selectable template exactly once.
//! Each [`Variant`] is either backed by a bundled template directory or by an
//! external generator command; [`VariantSource`] makes that a tagged union
//! rather than an optional field.
//!
//! # Adding a Variant
//!
//! 1. Add a [`Variant`] entry to the owning framework in [`FRAMEWORKS`]
//! 2. For [`VariantSource::Bundled`], ship `template-<id>/` next to the binary
//! 3. That's it; argument validation and prompts derive from the registry

use serde::Serialize;

/// Directory-name prefix of every bundled template.
pub const TEMPLATE_DIR_PREFIX: &str = "template-";

/// Package manifest inside each bundled template. Rewritten, never copied.
pub const MANIFEST_FILE: &str = "package.json";

/// Template entries stored under a different name than they are written as.
/// npm strips `.gitignore` when publishing, so templates ship `_gitignore`.
pub const RENAMED_FILES: &[(&str, &str)] = &[("_gitignore", ".gitignore")];

/// Name a template entry is written under in the new project.
pub fn output_name(entry: &str) -> &str {
    RENAMED_FILES
        .iter()
        .find(|(from, _)| *from == entry)
        .map_or(entry, |&(_, to)| to)
}

/// Display colour for a catalog entry. The CLI maps these to terminal styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StyleTag {
    Blue,
    Cyan,
    Green,
    GreenBright,
    Yellow,
    /// Terminal default.
    Reset,
}

/// Where a variant's files come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "command")]
pub enum VariantSource {
    /// Copied from `template-<id>/`.
    Bundled,
    /// Delegated to another tool. The command is written in npm form and
    /// contains the target-directory placeholder.
    External(&'static str),
}

/// A concrete, selectable template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Variant {
    /// Globally unique; doubles as the `--template` value and directory suffix.
    pub id: &'static str,
    pub display: &'static str,
    pub style: StyleTag,
    pub source: VariantSource,
}

impl Variant {
    /// Name of the bundled template directory, if this variant has one.
    pub fn template_dir_name(&self) -> Option<String> {
        match self.source {
            VariantSource::Bundled => Some(format!("{TEMPLATE_DIR_PREFIX}{}", self.id)),
            VariantSource::External(_) => None,
        }
    }

    pub fn external_command(&self) -> Option<&'static str> {
        match self.source {
            VariantSource::Bundled => None,
            VariantSource::External(command) => Some(command),
        }
    }
}

/// A framework groups related variants in the selection prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Framework {
    pub id: &'static str,
    pub display: &'static str,
    pub style: StyleTag,
    pub variants: &'static [Variant],
}

/// Every framework, in display order.
pub static FRAMEWORKS: &[Framework] = &[
    Framework {
        id: "vue",
        display: "Vue",
        style: StyleTag::Green,
        variants: &[
            Variant {
                id: "vue-ts",
                display: "TypeScript",
                style: StyleTag::Blue,
                source: VariantSource::Bundled,
            },
            Variant {
                id: "custom-create-vue",
                display: "Customize with create-vue ↗",
                style: StyleTag::Green,
                source: VariantSource::External("npm create vue@latest TARGET_DIR"),
            },
            Variant {
                id: "custom-nuxt",
                display: "Nuxt ↗",
                style: StyleTag::GreenBright,
                source: VariantSource::External("npm exec nuxi init TARGET_DIR"),
            },
        ],
    },
    Framework {
        id: "react",
        display: "React",
        style: StyleTag::Cyan,
        variants: &[
            Variant {
                id: "react-ts",
                display: "TypeScript",
                style: StyleTag::Blue,
                source: VariantSource::Bundled,
            },
            Variant {
                id: "react",
                display: "JavaScript (not recommended)",
                style: StyleTag::Yellow,
                source: VariantSource::Bundled,
            },
            Variant {
                id: "custom-react-router",
                display: "React Router v7 ↗",
                style: StyleTag::Cyan,
                source: VariantSource::External("npm create react-router@latest TARGET_DIR"),
            },
        ],
    },
    Framework {
        id: "others",
        display: "Others",
        style: StyleTag::Reset,
        variants: &[Variant {
            id: "create-electron-vite",
            display: "create-electron-vite ↗",
            style: StyleTag::Reset,
            source: VariantSource::External("npm create electron-vite@latest TARGET_DIR"),
        }],
    },
];

/// Every variant across all frameworks, in display order.
pub fn all_variants() -> impl Iterator<Item = &'static Variant> {
    FRAMEWORKS.iter().flat_map(|fw| fw.variants.iter())
}

/// All variant identifiers, for argument validation and help text.
pub fn template_ids() -> Vec<&'static str> {
    all_variants().map(|v| v.id).collect()
}

/// Look up a variant by identifier across all frameworks.
pub fn find_variant(id: &str) -> Option<&'static Variant> {
    all_variants().find(|v| v.id == id)
}

/// The framework a variant belongs to.
pub fn framework_of(variant_id: &str) -> Option<&'static Framework> {
    FRAMEWORKS
        .iter()
        .find(|fw| fw.variants.iter().any(|v| v.id == variant_id))
}
