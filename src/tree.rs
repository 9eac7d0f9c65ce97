//! Org Tree
//!
//! Builds the organization hierarchy from flat directory records.
//!
//! Nodes live in an arena and refer to their children by index, so the
//! tree has no back-references and every node has exactly one parent.
//! Two keys are supported: `orgUnitPath` segments, or `managerEmail`
//! links between people.

use std::collections::{BTreeMap, HashMap};

use tracing::warn;

use crate::config::HierarchyMode;
use crate::models::Person;

pub type NodeId = usize;

/// Index of the root node in every tree
pub const ROOT: NodeId = 0;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrgNode {
    /// Segment (or person) label; empty for the root
    pub name: String,
    /// Slash-joined keys from the root, e.g. `/CEO/R&D`
    pub path: String,
    pub children: BTreeMap<String, NodeId>,
    pub members: Vec<Person>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrgTree {
    nodes: Vec<OrgNode>,
    by_path: HashMap<String, NodeId>,
}

impl Default for OrgTree {
    fn default() -> Self {
        Self::new()
    }
}

impl OrgTree {
    /// A tree holding only an empty root
    pub fn new() -> Self {
        let mut by_path = HashMap::new();
        by_path.insert(String::new(), ROOT);
        Self {
            nodes: vec![OrgNode::default()],
            by_path,
        }
    }

    pub fn build(people: Vec<Person>, mode: HierarchyMode) -> Self {
        match mode {
            HierarchyMode::OrgUnitPath => Self::from_unit_paths(people),
            HierarchyMode::ManagerEmail => Self::from_managers(people),
        }
    }

    /// Group people by the segments of their `orgUnitPath`.
    pub fn from_unit_paths(people: Vec<Person>) -> Self {
        let mut tree = Self::new();
        for person in people {
            let path = person.org_unit_path.clone().unwrap_or_default();
            let mut current = ROOT;
            for segment in path.split('/').map(str::trim).filter(|s| !s.is_empty()) {
                current = tree.ensure_child(current, segment, segment);
            }
            tree.nodes[current].members.push(person);
        }
        tree
    }

    /// One node per person, nested under the person named by `managerEmail`.
    ///
    /// Unknown or missing managers make a person a root. Manager cycles are
    /// cut at the earliest record of the cycle, which then becomes a root.
    pub fn from_managers(people: Vec<Person>) -> Self {
        let email_key = |p: &Person| p.email.as_deref().map(str::to_lowercase);

        let mut index: HashMap<String, usize> = HashMap::new();
        for (i, person) in people.iter().enumerate() {
            if let Some(key) = email_key(person) {
                index.entry(key).or_insert(i);
            }
        }

        let mut parent: Vec<Option<usize>> = people
            .iter()
            .enumerate()
            .map(|(i, person)| {
                person
                    .manager_email
                    .as_deref()
                    .and_then(|m| index.get(&m.to_lowercase()).copied())
                    .filter(|&p| p != i)
            })
            .collect();

        break_cycles(&mut parent, &people);

        let mut tree = Self::new();
        let mut placed: Vec<Option<NodeId>> = vec![None; people.len()];
        for i in 0..people.len() {
            tree.place(i, &people, &parent, &mut placed);
        }
        for (i, person) in people.into_iter().enumerate() {
            if let Some(id) = placed[i] {
                tree.nodes[id].members.push(person);
            }
        }
        tree
    }

    /// Node for person `i`, creating it (and its managers) on first use.
    fn place(
        &mut self,
        i: usize,
        people: &[Person],
        parent: &[Option<usize>],
        placed: &mut Vec<Option<NodeId>>,
    ) -> NodeId {
        if let Some(id) = placed[i] {
            return id;
        }
        let under = match parent[i] {
            Some(p) => self.place(p, people, parent, placed),
            None => ROOT,
        };
        let person = &people[i];
        let mut key = person
            .email
            .as_deref()
            .map(str::to_lowercase)
            .unwrap_or_else(|| format!("#{}", i));
        if self.nodes[under].children.contains_key(&key) {
            key = format!("{}#{}", key, i);
        }
        let id = self.ensure_child(under, &key, unit_label(person));
        placed[i] = Some(id);
        id
    }

    fn ensure_child(&mut self, parent: NodeId, key: &str, label: &str) -> NodeId {
        if let Some(&id) = self.nodes[parent].children.get(key) {
            return id;
        }
        let path = format!("{}/{}", self.nodes[parent].path, key);
        let id = self.nodes.len();
        self.nodes.push(OrgNode {
            name: label.to_string(),
            path: path.clone(),
            children: BTreeMap::new(),
            members: Vec::new(),
        });
        self.nodes[parent].children.insert(key.to_string(), id);
        self.by_path.insert(path, id);
        id
    }

    pub fn root(&self) -> &OrgNode {
        &self.nodes[ROOT]
    }

    pub fn node(&self, id: NodeId) -> &OrgNode {
        &self.nodes[id]
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn child(&self, parent: NodeId, key: &str) -> Option<NodeId> {
        self.nodes[parent].children.get(key).copied()
    }

    /// Child lookup ignoring ASCII case (`CEO`, `Ceo`, `ceo`)
    pub fn child_ignore_case(&self, parent: NodeId, key: &str) -> Option<NodeId> {
        self.child(parent, key).or_else(|| {
            self.nodes[parent]
                .children
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(key))
                .map(|(_, &id)| id)
        })
    }

    /// Node at a slash-delimited path; empty segments are ignored
    pub fn lookup(&self, path: &str) -> Option<NodeId> {
        let normalized: String = path
            .split('/')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| format!("/{}", s))
            .collect();
        self.by_path.get(&normalized).copied()
    }

    /// Members of `id` and of every node below it, depth first
    pub fn subtree_members(&self, id: NodeId) -> Vec<&Person> {
        fn collect<'a>(tree: &'a OrgTree, id: NodeId, out: &mut Vec<&'a Person>) {
            let node = &tree.nodes[id];
            out.extend(node.members.iter());
            for &child in node.children.values() {
                collect(tree, child, out);
            }
        }

        let mut out = Vec::new();
        collect(self, id, &mut out);
        out
    }
}

/// Card title for a person's own node: team, else job title, else display name.
/// The arena key never reaches the page.
fn unit_label(person: &Person) -> &str {
    person
        .team_name()
        .or_else(|| Some(person.title_text().trim()).filter(|t| !t.is_empty()))
        .unwrap_or_else(|| person.display_name())
}

/// Drop one manager link in every cycle of `parent`.
fn break_cycles(parent: &mut [Option<usize>], people: &[Person]) {
    #[derive(Clone, Copy, PartialEq)]
    enum Visit {
        Fresh,
        Active,
        Done,
    }

    let mut state = vec![Visit::Fresh; parent.len()];
    for start in 0..parent.len() {
        let mut trail = Vec::new();
        let mut cursor = Some(start);
        while let Some(i) = cursor {
            match state[i] {
                Visit::Done => break,
                Visit::Active => {
                    let from = trail.iter().position(|&t| t == i).unwrap_or(0);
                    let cut = trail[from..].iter().copied().min().unwrap_or(i);
                    warn!(
                        "manager cycle through {:?}; treating it as a root",
                        people[cut].email.as_deref().unwrap_or_default()
                    );
                    parent[cut] = None;
                    break;
                }
                Visit::Fresh => {
                    state[i] = Visit::Active;
                    trail.push(i);
                    cursor = parent[i];
                }
            }
        }
        for i in trail {
            state[i] = Visit::Done;
        }
    }
}
