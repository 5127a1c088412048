//! Turns the static tables into ordered, keyed render plans. The Yew views
//! only map these plans to markup.

use crate::content::{ProjectEntry, SkillEntry};
use crate::motion::{EntranceAnimation, PROJECT_CARD, PROJECT_CARD_STAGGER_MS};
use crate::selection::SelectionState;

/// Identity key for a repeated unit. Position keeps duplicate labels apart;
/// nothing else feeds in, so keys survive unrelated re-renders.
pub fn render_key(label: &str, position: usize) -> String {
    format!("{label}-{position}")
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillGridMode {
    pub show_description_on_select: bool,
}

impl SkillGridMode {
    /// Hero "Featured Stack" card.
    pub const PREVIEW: Self = Self {
        show_description_on_select: false,
    };
    /// Skills section.
    pub const FULL: Self = Self {
        show_description_on_select: true,
    };
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Disclosure {
    /// The grid never shows descriptions.
    Omitted,
    Collapsed(&'static str),
    Expanded(&'static str),
}

impl Disclosure {
    pub fn is_visible(self) -> bool {
        matches!(self, Self::Expanded(_))
    }

    pub fn text(self) -> Option<&'static str> {
        match self {
            Self::Omitted => None,
            Self::Collapsed(text) | Self::Expanded(text) => Some(text),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkillTile {
    pub key: String,
    pub name: &'static str,
    pub selected: bool,
    pub disclosure: Disclosure,
}

pub fn skill_tiles(
    skills: &'static [SkillEntry],
    selection: SelectionState,
    mode: SkillGridMode,
) -> Vec<SkillTile> {
    skills
        .iter()
        .enumerate()
        .map(|(position, skill)| {
            let selected = selection.is_expanded(skill.name);
            let disclosure = match (mode.show_description_on_select, selected) {
                (false, _) => Disclosure::Omitted,
                (true, false) => Disclosure::Collapsed(skill.info),
                (true, true) => Disclosure::Expanded(skill.info),
            };

            SkillTile {
                key: render_key(skill.name, position),
                name: skill.name,
                selected,
                disclosure,
            }
        })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkKind {
    Demo,
    Source,
}

impl LinkKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Demo => "Live demo",
            Self::Source => "Source code",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::Demo => "↗",
            Self::Source => "</>",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutboundLink {
    pub kind: LinkKind,
    pub href: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BadgeItem {
    pub key: String,
    pub label: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectCard {
    pub key: String,
    pub title: &'static str,
    pub desc: &'static str,
    pub badges: Vec<BadgeItem>,
    pub links: [OutboundLink; 2],
    pub entrance: EntranceAnimation,
}

pub fn project_cards(projects: &'static [ProjectEntry]) -> Vec<ProjectCard> {
    projects
        .iter()
        .enumerate()
        .map(|(position, project)| ProjectCard {
            key: render_key(project.title, position),
            title: project.title,
            desc: project.desc,
            badges: project
                .stack
                .iter()
                .enumerate()
                .map(|(index, &tag)| BadgeItem {
                    key: render_key(tag, index),
                    label: tag,
                })
                .collect(),
            links: [
                OutboundLink {
                    kind: LinkKind::Demo,
                    href: project.demo,
                },
                OutboundLink {
                    kind: LinkKind::Source,
                    href: project.github,
                },
            ],
            entrance: PROJECT_CARD.staggered(position, PROJECT_CARD_STAGGER_MS),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{PROJECTS, SKILLS};
    use std::collections::HashSet;

    const TWO_SKILLS: &[SkillEntry] = &[
        SkillEntry {
            name: "HTML",
            info: "Markup",
        },
        SkillEntry {
            name: "CSS",
            info: "Styles",
        },
    ];

    fn visible_descriptions(tiles: &[SkillTile]) -> Vec<&'static str> {
        tiles
            .iter()
            .filter(|tile| tile.disclosure.is_visible())
            .map(|tile| tile.name)
            .collect()
    }

    #[test]
    fn both_grids_render_every_skill_in_order() {
        for mode in [SkillGridMode::PREVIEW, SkillGridMode::FULL] {
            let tiles = skill_tiles(SKILLS, SelectionState::default(), mode);
            assert_eq!(tiles.len(), 9);
            let names = tiles.iter().map(|tile| tile.name).collect::<Vec<_>>();
            let expected = SKILLS.iter().map(|skill| skill.name).collect::<Vec<_>>();
            assert_eq!(names, expected);
        }
    }

    #[test]
    fn selecting_each_skill_expands_then_collapses_it() {
        for skill in SKILLS {
            let selection = SelectionState::default().select(skill.name);
            let tiles = skill_tiles(SKILLS, selection, SkillGridMode::FULL);
            assert_eq!(visible_descriptions(&tiles), vec![skill.name]);

            let expanded = tiles
                .iter()
                .find(|tile| tile.name == skill.name)
                .expect("selected tile is rendered");
            assert_eq!(expanded.disclosure, Disclosure::Expanded(skill.info));

            let selection = selection.select(skill.name);
            assert_eq!(selection.selected(), None);
            let tiles = skill_tiles(SKILLS, selection, SkillGridMode::FULL);
            assert!(visible_descriptions(&tiles).is_empty());
        }
    }

    #[test]
    fn later_selection_supersedes_earlier_for_every_pair() {
        for first in SKILLS {
            for second in SKILLS.iter().filter(|skill| skill.name != first.name) {
                let selection = SelectionState::default()
                    .select(first.name)
                    .select(second.name);
                let tiles = skill_tiles(SKILLS, selection, SkillGridMode::FULL);
                assert_eq!(visible_descriptions(&tiles), vec![second.name]);
            }
        }
    }

    #[test]
    fn two_skill_walkthrough() {
        let mode = SkillGridMode::FULL;
        let mut selection = SelectionState::default();
        assert!(visible_descriptions(&skill_tiles(TWO_SKILLS, selection, mode)).is_empty());

        selection = selection.select("HTML");
        assert_eq!(selection.selected(), Some("HTML"));
        assert_eq!(
            visible_descriptions(&skill_tiles(TWO_SKILLS, selection, mode)),
            vec!["HTML"]
        );

        selection = selection.select("HTML");
        assert_eq!(selection.selected(), None);
        assert!(visible_descriptions(&skill_tiles(TWO_SKILLS, selection, mode)).is_empty());

        selection = selection.select("HTML").select("CSS");
        assert_eq!(selection.selected(), Some("CSS"));
        assert_eq!(
            visible_descriptions(&skill_tiles(TWO_SKILLS, selection, mode)),
            vec!["CSS"]
        );
    }

    #[test]
    fn preview_grid_marks_selection_but_omits_descriptions() {
        let selection = SelectionState::default().select("React");
        let tiles = skill_tiles(SKILLS, selection, SkillGridMode::PREVIEW);

        assert!(tiles.iter().all(|tile| tile.disclosure == Disclosure::Omitted));
        let selected = tiles
            .iter()
            .filter(|tile| tile.selected)
            .map(|tile| tile.name)
            .collect::<Vec<_>>();
        assert_eq!(selected, vec!["React"]);
    }

    #[test]
    fn keys_are_stable_across_selection_changes() {
        let before = skill_tiles(SKILLS, SelectionState::default(), SkillGridMode::FULL);
        let after = skill_tiles(
            SKILLS,
            SelectionState::default().select("Java"),
            SkillGridMode::FULL,
        );

        let keys_before = before.iter().map(|tile| &tile.key).collect::<Vec<_>>();
        let keys_after = after.iter().map(|tile| &tile.key).collect::<Vec<_>>();
        assert_eq!(keys_before, keys_after);
        assert_eq!(before[0].key, "HTML-0");
    }

    #[test]
    fn duplicate_labels_get_distinct_keys() {
        const DUPLICATED: &[SkillEntry] = &[
            SkillEntry {
                name: "Rust",
                info: "one",
            },
            SkillEntry {
                name: "Rust",
                info: "two",
            },
        ];

        let tiles = skill_tiles(DUPLICATED, SelectionState::default(), SkillGridMode::FULL);
        assert_ne!(tiles[0].key, tiles[1].key);
    }

    #[test]
    fn every_project_becomes_a_complete_card() {
        let cards = project_cards(PROJECTS);
        assert_eq!(cards.len(), 4);

        for (card, project) in cards.iter().zip(PROJECTS) {
            assert_eq!(card.title, project.title);
            assert!(!card.desc.is_empty());
            assert!(!card.badges.is_empty());
            assert_eq!(card.badges.len(), project.stack.len());

            let [demo, source] = card.links;
            assert_eq!(demo.kind, LinkKind::Demo);
            assert_eq!(demo.href, project.demo);
            assert_eq!(source.kind, LinkKind::Source);
            assert_eq!(source.href, project.github);
        }

        let keys = cards.iter().map(|card| card.key.as_str()).collect::<HashSet<_>>();
        assert_eq!(keys.len(), cards.len());
    }

    #[test]
    fn project_entrances_are_staggered_by_position() {
        let delays = project_cards(PROJECTS)
            .iter()
            .map(|card| card.entrance.delay_ms)
            .collect::<Vec<_>>();
        assert_eq!(delays, vec![0, 50, 100, 150]);
    }
}
