//! Chart Layout
//!
//! Turns directory records into the two view models the page renders:
//! grouped list sections for phones and a nested card tree for desktops.
//! Nothing here touches the DOM.

use std::cmp::Ordering;

use crate::config::{Config, HierarchyMode};
use crate::models::Person;
use crate::sort::{locale_cmp, sort_members};
use crate::tree::{NodeId, OrgTree, ROOT};

/// Segment name of the executive node
const CEO_SEGMENT: &str = "CEO";

/// Title of the top card when there is no CEO anywhere
const FALLBACK_ROOT_TITLE: &str = "Management";

/// Avatar glyph for open positions
const HIRING_AVATAR: &str = "+";

/// Everything needed to draw one person
#[derive(Debug, Clone, PartialEq)]
pub struct MemberCard {
    pub display_name: String,
    pub title: Option<String>,
    pub team: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub photo_url: Option<String>,
    /// Shown when there is no photo (or it fails to load)
    pub avatar: String,
    pub hiring: bool,
}

impl MemberCard {
    pub fn from_person(person: &Person) -> Self {
        let avatar = if person.is_hiring {
            HIRING_AVATAR.to_string()
        } else {
            person
                .name
                .as_deref()
                .and_then(|n| n.chars().next())
                .unwrap_or('?')
                .to_string()
        };
        let contact = |value: &Option<String>| if person.is_hiring { None } else { value.clone() };

        Self {
            display_name: person.display_name().to_string(),
            title: person.title.clone(),
            team: if person.is_hiring {
                None
            } else {
                person.team_name().map(String::from)
            },
            email: contact(&person.email),
            phone: contact(&person.cellphone),
            photo_url: contact(&person.photo_url),
            avatar,
            hiring: person.is_hiring,
        }
    }

    /// Value copied on desktop: email first, then phone
    pub fn preferred_contact(&self) -> Option<&str> {
        self.email.as_deref().or(self.phone.as_deref())
    }
}

/// One row inside a mobile section
#[derive(Debug, Clone, PartialEq)]
pub enum MobileRow {
    Member(MemberCard),
    /// Label of a sub-team, followed by its members
    SubHeader(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct MobileSection {
    pub title: String,
    pub rows: Vec<MobileRow>,
}

/// One card of the desktop tree, with its sub-units
#[derive(Debug, Clone, PartialEq)]
pub struct DesktopNode {
    pub title: String,
    pub members: Vec<MemberCard>,
    pub children: Vec<DesktopNode>,
}

/// Both renderings of one directory snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct OrgChart {
    pub sections: Vec<MobileSection>,
    pub tree: DesktopNode,
}

/// The top card and the departments hanging off it
struct Outline {
    title: String,
    members: Vec<Person>,
    has_head_node: bool,
    departments: Vec<NodeId>,
}

impl Outline {
    fn resolve(tree: &OrgTree, config: &Config) -> Self {
        match config.hierarchy {
            HierarchyMode::OrgUnitPath => Self::from_units(tree, config),
            HierarchyMode::ManagerEmail => Self::from_reporting_lines(tree, config),
        }
    }

    /// Head is the `CEO` unit, else a CEO-titled member at the root.
    fn from_units(tree: &OrgTree, config: &Config) -> Self {
        let head = tree.child_ignore_case(ROOT, CEO_SEGMENT);
        let root_members = &tree.root().members;

        let (title, mut members, promoted) = match head {
            Some(id) => {
                let node = tree.node(id);
                (node.name.clone(), node.members.clone(), None)
            }
            None => match root_members.iter().position(|m| m.title_contains(CEO_SEGMENT)) {
                Some(pos) => (CEO_SEGMENT.to_string(), vec![root_members[pos].clone()], Some(pos)),
                None => (FALLBACK_ROOT_TITLE.to_string(), Vec::new(), None),
            },
        };

        members.extend(leftovers(
            root_members
                .iter()
                .enumerate()
                .filter(|(i, _)| Some(*i) != promoted)
                .map(|(_, m)| m),
            config,
        ));

        let parent = head.unwrap_or(ROOT);
        let departments = tree.node(parent).children.values().copied().collect();

        Self {
            title,
            members,
            has_head_node: head.is_some(),
            departments: ordered_departments(tree, departments, config),
        }
    }

    /// Every person without a manager sits at the root. The first of them
    /// with a CEO title heads the chart; the others join the top card, and
    /// everyone reporting to any of them forms the departments.
    fn from_reporting_lines(tree: &OrgTree, config: &Config) -> Self {
        // arena ids follow input order
        let mut tops: Vec<NodeId> = tree.root().children.values().copied().collect();
        tops.sort_unstable();

        let head = tops.iter().copied().find(|&id| {
            tree.node(id).members.iter().any(|m| m.title_contains(CEO_SEGMENT))
        });

        let (title, mut members) = match head {
            Some(id) => (CEO_SEGMENT.to_string(), tree.node(id).members.clone()),
            None => (FALLBACK_ROOT_TITLE.to_string(), Vec::new()),
        };
        let others = tops.iter().copied().filter(|&id| Some(id) != head);
        members.extend(leftovers(
            others.clone().flat_map(|id| tree.node(id).members.iter()),
            config,
        ));

        let departments = head
            .into_iter()
            .chain(others)
            .flat_map(|id| tree.node(id).children.values().copied())
            .collect();

        Self {
            title,
            members,
            has_head_node: head.is_some(),
            departments: ordered_departments(tree, departments, config),
        }
    }
}

/// Root-level people merged into the top card: no service accounts, no
/// second CEO.
fn leftovers<'a>(candidates: impl Iterator<Item = &'a Person>, config: &Config) -> Vec<Person> {
    candidates
        .filter(|m| !m.title_contains(CEO_SEGMENT))
        .filter(|m| !is_system_account(m, &config.system_account_markers))
        .cloned()
        .collect()
}

fn ordered_departments(tree: &OrgTree, mut departments: Vec<NodeId>, config: &Config) -> Vec<NodeId> {
    departments.sort_by(|&a, &b| {
        department_cmp(&tree.node(a).name, &tree.node(b).name, &config.department_order)
    });
    departments
}

/// Service accounts are matched by name fragments, case-insensitively.
pub fn is_system_account(person: &Person, markers: &[String]) -> bool {
    let name = person.sort_name().to_lowercase();
    markers
        .iter()
        .any(|marker| !marker.is_empty() && name.contains(&marker.to_lowercase()))
}

/// Preferred departments first (in list order), the rest alphabetically.
pub fn department_cmp(a: &str, b: &str, preferred: &[String]) -> Ordering {
    let rank = |name: &str| preferred.iter().position(|p| p == name);
    match (rank(a), rank(b)) {
        (Some(ia), Some(ib)) => ia.cmp(&ib),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => locale_cmp(a, b),
    }
}

fn cards(members: &[Person]) -> Vec<MemberCard> {
    sort_members(members).iter().map(MemberCard::from_person).collect()
}

fn sorted_children(tree: &OrgTree, id: NodeId) -> Vec<NodeId> {
    let mut children: Vec<NodeId> = tree.node(id).children.values().copied().collect();
    children.sort_by(|&a, &b| locale_cmp(&tree.node(a).name, &tree.node(b).name));
    children
}

fn department_section(tree: &OrgTree, id: NodeId) -> MobileSection {
    let node = tree.node(id);
    let mut rows: Vec<MobileRow> = cards(&node.members).into_iter().map(MobileRow::Member).collect();

    // Only one level of sub-teams; anything deeper is folded into its sub-team.
    for sub in sorted_children(tree, id) {
        rows.push(MobileRow::SubHeader(tree.node(sub).name.clone()));
        let folded: Vec<Person> = tree.subtree_members(sub).into_iter().cloned().collect();
        rows.extend(cards(&folded).into_iter().map(MobileRow::Member));
    }

    MobileSection {
        title: node.name.clone(),
        rows,
    }
}

fn desktop_branch(tree: &OrgTree, id: NodeId) -> DesktopNode {
    let node = tree.node(id);
    DesktopNode {
        title: node.name.clone(),
        members: cards(&node.members),
        children: sorted_children(tree, id)
            .into_iter()
            .map(|child| desktop_branch(tree, child))
            .collect(),
    }
}

impl OrgChart {
    /// Filter out inactive records and lay out both views.
    pub fn build(people: &[Person], config: &Config) -> Self {
        let visible: Vec<Person> = people.iter().filter(|p| p.is_visible()).cloned().collect();
        let tree = OrgTree::build(visible, config.hierarchy);
        Self::from_tree(&tree, config)
    }

    pub fn from_tree(tree: &OrgTree, config: &Config) -> Self {
        let outline = Outline::resolve(tree, config);

        let mut sections = Vec::new();
        if outline.has_head_node || !outline.members.is_empty() {
            sections.push(MobileSection {
                title: outline.title.clone(),
                rows: cards(&outline.members).into_iter().map(MobileRow::Member).collect(),
            });
        }
        sections.extend(outline.departments.iter().map(|&id| department_section(tree, id)));

        let root = DesktopNode {
            title: outline.title,
            members: cards(&outline.members),
            children: outline
                .departments
                .iter()
                .map(|&id| desktop_branch(tree, id))
                .collect(),
        };

        Self { sections, tree: root }
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty() && self.tree.members.is_empty() && self.tree.children.is_empty()
    }

    /// Every card in the desktop tree, depth first
    #[cfg(test)]
    pub fn desktop_cards(&self) -> Vec<&MemberCard> {
        fn walk<'a>(node: &'a DesktopNode, out: &mut Vec<&'a MemberCard>) {
            out.extend(node.members.iter());
            for child in &node.children {
                walk(child, out);
            }
        }

        let mut out = Vec::new();
        walk(&self.tree, &mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(name: &str, title: &str, path: &str) -> Person {
        Person {
            name: Some(name.to_string()),
            title: Some(title.to_string()).filter(|t| !t.is_empty()),
            org_unit_path: Some(path.to_string()).filter(|p| !p.is_empty()),
            email: Some(format!("{}@corp.test", name.to_lowercase())),
            ..Default::default()
        }
    }

    fn section_titles(chart: &OrgChart) -> Vec<&str> {
        chart.sections.iter().map(|s| s.title.as_str()).collect()
    }

    fn child_titles(node: &DesktopNode) -> Vec<&str> {
        node.children.iter().map(|c| c.title.as_str()).collect()
    }

    fn row_labels(section: &MobileSection) -> Vec<String> {
        section
            .rows
            .iter()
            .map(|row| match row {
                MobileRow::Member(card) => card.display_name.clone(),
                MobileRow::SubHeader(name) => format!("# {}", name),
            })
            .collect()
    }

    #[test]
    fn test_ceo_node_and_department_order() {
        let people = vec![
            person("Lee", "CEO", "/CEO"),
            person("Kim", "PRO", "/CEO/Sales"),
            person("Han", "PM", "/CEO/R&D"),
            person("Oh", "CFO", "/CEO/Administration"),
            person("Yoo", "PRO", "/CEO/Design"),
            person("Seo", "PRO", "/CEO/Strategic Planning"),
        ];
        let chart = OrgChart::build(&people, &Config::default());

        assert_eq!(
            section_titles(&chart),
            vec!["CEO", "Administration", "R&D", "Strategic Planning", "Design", "Sales"]
        );
        assert_eq!(chart.tree.title, "CEO");
        assert_eq!(chart.tree.members[0].display_name, "Lee");
        assert_eq!(
            child_titles(&chart.tree),
            vec!["Administration", "R&D", "Strategic Planning", "Design", "Sales"]
        );
    }

    #[test]
    fn test_ceo_promoted_from_root_members() {
        let people = vec![
            person("Kim", "PRO", ""),
            person("Lee", "CEO", ""),
            person("Park", "PM", "/R&D"),
        ];
        let chart = OrgChart::build(&people, &Config::default());

        assert_eq!(chart.tree.title, "CEO");
        let names: Vec<_> = chart.tree.members.iter().map(|c| c.display_name.as_str()).collect();
        assert_eq!(names, vec!["Lee", "Kim"]);
        assert_eq!(child_titles(&chart.tree), vec!["R&D"]);

        // the CEO appears exactly once
        let lee = chart.desktop_cards().into_iter().filter(|c| c.display_name == "Lee").count();
        assert_eq!(lee, 1);
    }

    #[test]
    fn test_no_ceo_falls_back_to_management() {
        let people = vec![person("Kim", "PRO", ""), person("Park", "PM", "/R&D")];
        let chart = OrgChart::build(&people, &Config::default());
        assert_eq!(chart.tree.title, "Management");
        assert_eq!(section_titles(&chart), vec!["Management", "R&D"]);
    }

    #[test]
    fn test_system_accounts_hidden_from_root_card() {
        let people = vec![
            person("Lee", "CEO", "/CEO"),
            person("Admin Bot", "", ""),
            person("Vision Sync", "", ""),
            person("Advisor Cho", "Advisor", ""),
        ];
        let chart = OrgChart::build(&people, &Config::default());
        let names: Vec<_> = chart.tree.members.iter().map(|c| c.display_name.as_str()).collect();
        assert_eq!(names, vec!["Lee", "Advisor Cho"]);
    }

    #[test]
    fn test_suspended_excluded_and_hiring_kept() {
        let mut gone = person("Gone", "PRO", "/CEO/R&D");
        gone.suspended = true;
        let opening = Person {
            title: Some("Engineer".into()),
            org_unit_path: Some("/CEO/R&D".into()),
            email: Some("jobs@corp.test".into()),
            suspended: true,
            is_hiring: true,
            ..Default::default()
        };
        let people = vec![person("Lee", "CEO", "/CEO"), gone, opening, person("Han", "PM", "/CEO/R&D")];
        let chart = OrgChart::build(&people, &Config::default());

        let names: Vec<_> = chart.desktop_cards().iter().map(|c| c.display_name.clone()).collect();
        assert!(!names.contains(&"Gone".to_string()));
        assert!(names.contains(&crate::models::HIRING_LABEL.to_string()));

        let rnd = &chart.tree.children[0];
        let last = rnd.members.last().unwrap();
        assert!(last.hiring);
        assert_eq!(last.avatar, "+");
        assert_eq!(last.email, None);
        assert_eq!(last.team, None);
        assert_eq!(last.title.as_deref(), Some("Engineer"));
    }

    #[test]
    fn test_mobile_flattens_one_level() {
        let people = vec![
            person("Lee", "CEO", "/CEO"),
            person("Han", "PM", "/CEO/R&D"),
            person("Kim", "PRO", "/CEO/R&D/Backend"),
            person("Jo", "인턴", "/CEO/R&D/Backend/Infra"),
            person("Ahn", "PRO", "/CEO/R&D/Frontend"),
        ];
        let chart = OrgChart::build(&people, &Config::default());

        let rnd = &chart.sections[1];
        assert_eq!(rnd.title, "R&D");
        assert_eq!(row_labels(rnd), vec!["Han", "# Backend", "Kim", "Jo", "# Frontend", "Ahn"]);

        // desktop keeps the full depth
        let backend = &chart.tree.children[0].children[0];
        assert_eq!(backend.title, "Backend");
        assert_eq!(child_titles(backend), vec!["Infra"]);
    }

    #[test]
    fn test_member_card_fields() {
        let mut p = person("Kim", "PRO", "/CEO/R&D");
        p.cellphone = Some("010-1234-5678".into());
        let card = MemberCard::from_person(&p);
        assert_eq!(card.avatar, "K");
        assert_eq!(card.team.as_deref(), Some("R&D"));
        assert_eq!(card.preferred_contact(), Some("kim@corp.test"));

        p.email = None;
        assert_eq!(MemberCard::from_person(&p).preferred_contact(), Some("010-1234-5678"));

        let unnamed = MemberCard::from_person(&Person::default());
        assert_eq!(unnamed.avatar, "?");
    }

    #[test]
    fn test_department_cmp() {
        let preferred = Config::default().department_order;
        let mut names = vec!["Sales", "R&D", "Design", "Administration"];
        names.sort_by(|a, b| department_cmp(a, b, &preferred));
        assert_eq!(names, vec!["Administration", "R&D", "Design", "Sales"]);
    }

    fn reporting(name: Option<&str>, title: &str, email: &str, manager: Option<&str>) -> Person {
        Person {
            name: name.map(String::from),
            title: Some(title.to_string()).filter(|t| !t.is_empty()),
            email: Some(email.to_string()).filter(|e| !e.is_empty()),
            manager_email: manager.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn test_manager_hierarchy_layout() {
        let config = Config {
            hierarchy: HierarchyMode::ManagerEmail,
            ..Config::default()
        };
        let mut opening = reporting(None, "", "", Some("kim@corp.test"));
        opening.is_hiring = true;
        let people = vec![
            reporting(Some("Lee"), "CEO", "lee@corp.test", None),
            reporting(Some("Kim"), "PM", "kim@corp.test", Some("lee@corp.test")),
            opening,
            reporting(Some("Cho"), "Advisor", "cho@corp.test", None),
            reporting(Some("Admin Bot"), "", "admin@corp.test", None),
        ];
        let chart = OrgChart::build(&people, &config);

        assert_eq!(chart.tree.title, "CEO");
        let names: Vec<_> = chart.tree.members.iter().map(|c| c.display_name.as_str()).collect();
        assert_eq!(names, vec!["Lee", "Cho"]);
        assert_eq!(child_titles(&chart.tree), vec!["PM"]);

        let pm = &chart.tree.children[0];
        let pm_names: Vec<_> = pm.members.iter().map(|c| c.display_name.as_str()).collect();
        assert_eq!(pm_names, vec!["Kim"]);
        assert_eq!(child_titles(pm), vec![crate::models::HIRING_LABEL]);

        assert_eq!(section_titles(&chart), vec!["CEO", "PM"]);
        assert_eq!(
            row_labels(&chart.sections[1]),
            vec!["Kim".to_string(), format!("# {}", crate::models::HIRING_LABEL), crate::models::HIRING_LABEL.to_string()]
        );

        // no card or section carries an arena key
        let mut titles = vec![chart.tree.title.clone()];
        titles.extend(chart.sections.iter().map(|s| s.title.clone()));
        assert!(titles.iter().all(|t| !t.starts_with('#') && !t.contains('@')));
    }

    #[test]
    fn test_manager_hierarchy_without_ceo() {
        let config = Config {
            hierarchy: HierarchyMode::ManagerEmail,
            ..Config::default()
        };
        let people = vec![
            reporting(Some("Han"), "Director", "han@corp.test", None),
            reporting(Some("Oh"), "PRO", "oh@corp.test", Some("han@corp.test")),
        ];
        let chart = OrgChart::build(&people, &config);

        assert_eq!(chart.tree.title, "Management");
        assert_eq!(chart.tree.members[0].display_name, "Han");
        assert_eq!(section_titles(&chart), vec!["Management", "PRO"]);
    }

    #[test]
    fn test_empty_directory() {
        let chart = OrgChart::build(&[], &Config::default());
        assert!(chart.is_empty());
        assert_eq!(chart.tree.title, "Management");
    }
}
