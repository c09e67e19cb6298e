// src/networking/connection_path.rs
use crate::types::{ConnectionEdge, ConnectionPath, Contact};
use std::collections::{HashMap, HashSet, VecDeque};
use tracing::debug;

/// Search radius, counted from the user (a direct contact is depth 1).
pub const MAX_DEGREE: usize = 3;

/// Undirected relationship graph built from connection rows.
///
/// Neighbour lists keep edge insertion order, which is what decides between
/// several shortest paths of equal length.
pub struct ConnectionGraph<'a> {
    adjacency: HashMap<&'a str, Vec<&'a str>>,
    directory: HashMap<&'a str, &'a Contact>,
}

impl<'a> ConnectionGraph<'a> {
    pub fn new(edges: &'a [ConnectionEdge]) -> Self {
        let mut adjacency: HashMap<&'a str, Vec<&'a str>> = HashMap::new();

        for edge in edges {
            adjacency
                .entry(edge.contact_a.as_str())
                .or_default()
                .push(edge.contact_b.as_str());
            adjacency
                .entry(edge.contact_b.as_str())
                .or_default()
                .push(edge.contact_a.as_str());
        }

        Self {
            adjacency,
            directory: HashMap::new(),
        }
    }

    /// Contacts outside the user's own list that may appear as intermediate
    /// hops or as the target. The user's contacts still win on id clashes.
    pub fn with_directory(mut self, contacts: &'a [Contact]) -> Self {
        for contact in contacts {
            self.directory.insert(contact.id.as_str(), contact);
        }
        self
    }

    pub fn neighbors(&self, contact_id: &str) -> &[&'a str] {
        self.adjacency
            .get(contact_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Multi-source BFS from every direct contact of the user.
    pub fn find_path(
        &self,
        user_contacts: &'a [Contact],
        target_contact_id: &str,
    ) -> Option<ConnectionPath> {
        if let Some(target) = user_contacts.iter().find(|c| c.id == target_contact_id) {
            return Some(ConnectionPath {
                target: target.clone(),
                path: vec![target.clone()],
                degree: 1,
                path_description: describe_path(1, &[]),
            });
        }

        let mut lookup = self.directory.clone();
        for contact in user_contacts {
            lookup.insert(contact.id.as_str(), contact);
        }

        let mut queue: VecDeque<(&str, usize, Vec<&str>)> = VecDeque::new();
        let mut visited: HashSet<&str> = HashSet::new();

        for contact in user_contacts {
            if visited.insert(contact.id.as_str()) {
                queue.push_back((contact.id.as_str(), 1, vec![contact.id.as_str()]));
            }
        }

        while let Some((current, depth, path)) = queue.pop_front() {
            if depth > MAX_DEGREE {
                continue;
            }

            if current == target_contact_id {
                let resolved: Vec<Contact> = path
                    .iter()
                    .filter_map(|id| lookup.get(*id).map(|c| (*c).clone()))
                    .collect();
                if resolved.len() < path.len() {
                    debug!(
                        "Dropped {} unresolved hop(s) on path to {}",
                        path.len() - resolved.len(),
                        target_contact_id
                    );
                }

                let target = lookup
                    .get(target_contact_id)
                    .map(|c| (*c).clone())
                    .unwrap_or_else(|| Contact::unresolved(target_contact_id));

                return Some(ConnectionPath {
                    target,
                    path_description: describe_path(depth, &resolved),
                    path: resolved,
                    degree: depth,
                });
            }

            for &neighbor in self.neighbors(current) {
                if visited.insert(neighbor) {
                    let mut next_path = path.clone();
                    next_path.push(neighbor);
                    queue.push_back((neighbor, depth + 1, next_path));
                }
            }
        }

        None
    }
}

/// Convenience wrapper: resolves hops from the user's own contacts only.
pub fn find_connection_path(
    user_contacts: &[Contact],
    target_contact_id: &str,
    all_connections: &[ConnectionEdge],
) -> Option<ConnectionPath> {
    ConnectionGraph::new(all_connections).find_path(user_contacts, target_contact_id)
}

pub fn describe_path(degree: usize, path: &[Contact]) -> String {
    let hop_name = |index: usize| {
        path.get(index)
            .map(|c| c.name.as_str())
            .unwrap_or("unknown contact")
    };

    match degree {
        1 => "Direct connection".to_string(),
        2 => format!("2nd degree via {}", hop_name(0)),
        3 => format!("3rd degree via {} → {}", hop_name(0), hop_name(1)),
        n => format!("{}-degree connection", n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(id: &str, name: &str) -> Contact {
        Contact::new(id, name).unwrap()
    }

    fn edge(a: &str, b: &str) -> ConnectionEdge {
        ConnectionEdge::new(a, b).unwrap()
    }

    fn network() -> Vec<Contact> {
        vec![
            contact("alice", "Alice"),
            contact("bob", "Bob"),
            contact("carol", "Carol"),
            contact("dave", "Dave"),
            contact("erin", "Erin"),
        ]
    }

    #[test]
    fn test_direct_contact_ignores_edges() {
        let contacts = network();
        let edges = vec![edge("alice", "bob"), edge("bob", "carol")];

        let found = find_connection_path(&contacts, "carol", &edges).unwrap();
        assert_eq!(found.degree, 1);
        assert_eq!(found.path, vec![contacts[2].clone()]);
        assert_eq!(found.path_description, "Direct connection");

        let found = find_connection_path(&contacts, "carol", &[]).unwrap();
        assert_eq!(found.degree, 1);
    }

    #[test]
    fn test_second_degree_via_first_hop() {
        let mine = vec![contact("alice", "Alice")];
        let edges = vec![edge("alice", "bob")];

        let found = find_connection_path(&mine, "bob", &edges).unwrap();
        assert_eq!(found.degree, 2);
        assert_eq!(found.path_description, "2nd degree via Alice");
        // Bob is not one of the user's contacts, so only Alice resolves
        assert_eq!(found.path.len(), 1);
        assert_eq!(found.target, Contact::unresolved("bob"));
    }

    #[test]
    fn test_third_degree_with_directory() {
        let mine = vec![contact("alice", "Alice")];
        let others = vec![contact("bob", "Bob"), contact("carol", "Carol")];
        let edges = vec![edge("alice", "bob"), edge("bob", "carol")];

        let found = ConnectionGraph::new(&edges)
            .with_directory(&others)
            .find_path(&mine, "carol")
            .unwrap();

        assert_eq!(found.degree, 3);
        assert_eq!(found.path.len(), 3);
        assert_eq!(found.target.name, "Carol");
        assert_eq!(found.path_description, "3rd degree via Alice → Bob");
    }

    #[test]
    fn test_beyond_three_hops_is_none() {
        let mine = vec![contact("a", "A")];
        let edges = vec![edge("a", "b"), edge("b", "c"), edge("c", "d")];

        assert_eq!(find_connection_path(&mine, "c", &edges).unwrap().degree, 3);
        assert!(find_connection_path(&mine, "d", &edges).is_none());
    }

    #[test]
    fn test_unreachable_target_is_none() {
        let mine = vec![contact("a", "A")];
        let edges = vec![edge("x", "y")];
        assert!(find_connection_path(&mine, "y", &edges).is_none());
        assert!(find_connection_path(&[], "y", &edges).is_none());
    }

    #[test]
    fn test_edge_direction_does_not_matter() {
        let mine = vec![contact("a", "A")];
        let forward = vec![edge("a", "b"), edge("b", "c")];
        let backward = vec![edge("b", "a"), edge("c", "b")];

        let f = find_connection_path(&mine, "c", &forward).unwrap();
        let b = find_connection_path(&mine, "c", &backward).unwrap();
        assert_eq!(f.degree, b.degree);
        assert_eq!(f.degree, 3);
    }

    #[test]
    fn test_shortest_path_wins_over_longer_chain() {
        let mine = vec![contact("a", "A"), contact("z", "Z")];
        let edges = vec![edge("a", "b"), edge("b", "t"), edge("z", "t")];

        let found = find_connection_path(&mine, "t", &edges).unwrap();
        assert_eq!(found.degree, 2);
        assert_eq!(found.path_description, "2nd degree via Z");
    }

    #[test]
    fn test_ties_follow_contact_order() {
        let mine = vec![contact("a", "A"), contact("b", "B")];
        let edges = vec![edge("b", "t"), edge("a", "t")];

        let found = find_connection_path(&mine, "t", &edges).unwrap();
        assert_eq!(found.path_description, "2nd degree via A");
    }

    #[test]
    fn test_describe_path_fallback() {
        assert_eq!(describe_path(4, &[]), "4-degree connection");
        assert_eq!(describe_path(2, &[]), "2nd degree via unknown contact");
    }
}
