use crate::utils::collections::Queue;
use std::collections::HashMap;
use std::hash::Hash;

/// Distance, in edges, from `start` to every node reachable through
/// `neighbours`.
///
/// Nodes are expanded level by level, so each distance is the fewest edges
/// on any path from `start`.
///
/// ```
/// use aoc_solutions::utils::search::breadth_first;
///
/// // Numbers reachable from 1 by doubling or adding 3, up to 10
/// let distances = breadth_first(1u32, |&n| [n * 2, n + 3].into_iter().filter(|&m| m <= 10));
/// assert_eq!(distances[&1], 0);
/// assert_eq!(distances[&4], 1);
/// assert_eq!(distances[&8], 2);
/// assert!(!distances.contains_key(&3));
/// ```
pub fn breadth_first<T, F, I>(start: T, mut neighbours: F) -> HashMap<T, usize>
where
    T: Clone + Eq + Hash,
    F: FnMut(&T) -> I,
    I: IntoIterator<Item = T>,
{
    let mut distances = HashMap::from([(start.clone(), 0)]);
    let mut queue = Queue::new();
    queue.push(start);

    while let Some(node) = queue.pop() {
        let distance = distances[&node];
        for next in neighbours(&node) {
            if !distances.contains_key(&next) {
                distances.insert(next.clone(), distance + 1);
                queue.push(next);
            }
        }
    }

    distances
}
