//! Board solvability and hint lookup
//!
//! Simulates the real clearing process: repeatedly remove the first snake
//! whose exit ray is unobstructed until nothing more comes off. Removing a
//! snake never obstructs another (a ray can only lose blockers), so this
//! greedy fixed point is both sound and complete for the one-at-a-time
//! removal model.

use super::collision::collides;
use super::snake::Snake;

/// Whether the whole board can be cleared by iterative legal removal
pub fn is_solvable(snakes: &[Snake]) -> bool {
    if snakes.is_empty() {
        return true;
    }
    let mut remaining: Vec<&Snake> = snakes.iter().collect();
    let mut changed = true;
    while changed && !remaining.is_empty() {
        changed = false;
        for i in 0..remaining.len() {
            let current = remaining[i];
            let others = remaining
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .map(|(_, s)| *s);
            if !collides(current, others) {
                remaining.remove(i);
                changed = true;
                break;
            }
        }
    }
    remaining.is_empty()
}

/// Id of the first snake that can currently exit, if any
pub fn find_hintable(snakes: &[Snake]) -> Option<u32> {
    snakes
        .iter()
        .find(|s| !collides(s, snakes.iter().filter(|o| o.id != s.id)))
        .map(|s| s.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::snake::Heading;
    use glam::Vec2;

    fn snake(id: u32, points: &[(f32, f32)], heading: Heading) -> Snake {
        Snake::new(
            id,
            points.iter().map(|&(x, y)| Vec2::new(x, y)).collect(),
            heading,
            0,
        )
    }

    #[test]
    fn test_empty_board_is_solvable() {
        assert!(is_solvable(&[]));
        assert_eq!(find_hintable(&[]), None);
    }

    #[test]
    fn test_independent_pair_is_solvable() {
        let a = snake(1, &[(100.0, 100.0), (100.0, 200.0)], Heading::Down);
        let b = snake(2, &[(200.0, 150.0), (300.0, 150.0)], Heading::Right);
        assert!(is_solvable(&[a, b]));
    }

    #[test]
    fn test_chain_resolves_in_dependency_order() {
        // a's exit is blocked by b; b is free. Clearing b frees a.
        let a = snake(1, &[(100.0, 100.0), (200.0, 100.0)], Heading::Right);
        let b = snake(2, &[(280.0, 200.0), (280.0, 40.0)], Heading::Up);
        assert!(collides(&a, [&b]));
        assert!(!collides(&b, [&a]));
        assert!(is_solvable(&[a.clone(), b.clone()]));
        // The hint is the free snake, not the first in the list
        assert_eq!(find_hintable(&[a, b]), Some(2));
    }

    #[test]
    fn test_mutual_block_is_unsolvable() {
        // Two heads facing each other on one row: neither can ever exit.
        let a = snake(1, &[(100.0, 100.0), (160.0, 100.0)], Heading::Right);
        let b = snake(2, &[(320.0, 100.0), (240.0, 100.0)], Heading::Left);
        assert!(collides(&a, [&b]));
        assert!(collides(&b, [&a]));
        assert!(!is_solvable(&[a.clone(), b.clone()]));
        assert_eq!(find_hintable(&[a, b]), None);
    }

    #[test]
    fn test_removal_is_monotone() {
        // Removing any snake never flips another's collision to true.
        let snakes = vec![
            snake(1, &[(100.0, 100.0), (200.0, 100.0)], Heading::Right),
            snake(2, &[(280.0, 200.0), (280.0, 40.0)], Heading::Up),
            snake(3, &[(160.0, 240.0), (40.0, 240.0)], Heading::Left),
            snake(4, &[(320.0, 280.0), (320.0, 360.0)], Heading::Down),
        ];
        assert_removal_monotone(&snakes);
    }

    #[test]
    fn test_removal_is_monotone_on_generated_board() {
        let snakes = crate::sim::generator::LevelGenerator::new(3).generate(6);
        assert!(!snakes.is_empty());
        assert_removal_monotone(&snakes);
    }

    /// No snake's collision result may flip to true when any one other
    /// snake is removed
    fn assert_removal_monotone(snakes: &[Snake]) {
        for removed in 0..snakes.len() {
            let reduced: Vec<&Snake> = snakes
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != removed)
                .map(|(_, s)| s)
                .collect();
            for s in &reduced {
                let before = collides(
                    s,
                    snakes.iter().filter(|o| o.id != s.id),
                );
                let after = collides(
                    s,
                    reduced.iter().filter(|o| o.id != s.id).copied(),
                );
                assert!(
                    !(after && !before),
                    "removal introduced a collision for snake {}",
                    s.id
                );
            }
        }
    }
}
