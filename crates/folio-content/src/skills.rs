//! Skill groups shown on the about page.

use serde::{Deserialize, Deserializer, Serialize};

use crate::icon::Icon;

/// A single skill with a proficiency level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    #[serde(default)]
    pub name: String,
    /// Proficiency, 0-100. Out-of-range values are clamped when read.
    #[serde(default, deserialize_with = "clamped_level")]
    pub level: u8,
    #[serde(default)]
    pub icon: Icon,
}

impl Skill {
    /// Proficiency clamped to 0-100.
    pub fn level(&self) -> u8 {
        self.level.min(100)
    }
}

/// A named group of skills ("Languages", "Frameworks", ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGroup {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

fn clamped_level<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    let level = i64::deserialize(deserializer)?;
    Ok(level.clamp(0, 100) as u8)
}

/// A skill paired with the group it came from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FlatSkill<'a> {
    pub group: &'a str,
    pub skill: &'a Skill,
}

/// Flatten groups into one list, preserving group then skill order.
pub fn flatten_skills(groups: &[SkillGroup]) -> Vec<FlatSkill<'_>> {
    groups
        .iter()
        .flat_map(|g| {
            g.skills.iter().map(move |skill| FlatSkill {
                group: g.name.as_str(),
                skill,
            })
        })
        .collect()
}

/// Skills in the named group, or every skill for `"All"`.
///
/// Group names match case-insensitively.
pub fn skills_in_group<'a>(groups: &'a [SkillGroup], group: &str) -> Vec<FlatSkill<'a>> {
    if group == folio_core::ALL_FILTER {
        return flatten_skills(groups);
    }
    flatten_skills(groups)
        .into_iter()
        .filter(|s| s.group.eq_ignore_ascii_case(group))
        .collect()
}
