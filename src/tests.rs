#[cfg(test)]
mod tests {
    use crate::automaton::SEED_OFFSETS;
    use crate::config::{pixel_to_cell, CELL_PIXEL_SIZE};
    use crate::ffi::{
        lg_create, lg_destroy, lg_get_cell, lg_get_generation, lg_set_cell, lg_snapshot, lg_step,
    };
    use crate::{EngineConfig, GridEngine};

    /// Engine of the given size with the seed pattern cleared.
    fn empty_engine(height: i32, width: i32) -> GridEngine {
        let mut engine = GridEngine::new(height, width).unwrap();
        for y in 0..height {
            for x in 0..width {
                engine.remove_cell(x, y);
            }
        }
        engine
    }

    #[test]
    fn test_dimensions_never_change() {
        let mut engine = GridEngine::new(17, 23).unwrap();
        for _ in 0..50 {
            engine.step();
            let grid = engine.current_generation();
            assert_eq!(grid.width(), 23);
            assert_eq!(grid.height(), 17);
            assert_eq!(grid.as_slice().len(), 17 * 23);
        }
    }

    #[test]
    fn test_generation_counts_steps() {
        let mut engine = GridEngine::new(10, 10).unwrap();
        for n in 1..=25u64 {
            engine.step();
            assert_eq!(engine.generation(), n);
        }

        // Point writes never touch the counter
        engine.add_cell(0, 0);
        engine.remove_cell(0, 0);
        assert_eq!(engine.generation(), 25);
    }

    #[test]
    fn test_toroidal_wrap_from_corner() {
        let mut engine = empty_engine(5, 5);
        engine.add_cell(0, 0);

        let wrapped = [
            (4, 4),
            (4, 0),
            (0, 4),
            (1, 1),
            (1, 0),
            (0, 1),
            (4, 1),
            (1, 4),
        ];
        for y in 0..5 {
            for x in 0..5 {
                let expected = u8::from(wrapped.contains(&(x, y)));
                assert_eq!(
                    engine.count_neighbors(x, y),
                    expected,
                    "neighbor count at ({x}, {y})"
                );
            }
        }
    }

    #[test]
    fn test_block_is_stable() {
        let mut engine = empty_engine(8, 8);
        let block = [(3, 3), (4, 3), (3, 4), (4, 4)];
        for &(x, y) in &block {
            engine.add_cell(x, y);
        }
        let before = engine.current_generation();

        for _ in 0..10 {
            engine.step();
            assert_eq!(engine.current_generation(), before);
        }
    }

    #[test]
    fn test_block_across_the_seam_is_stable() {
        let mut engine = empty_engine(6, 6);
        let block = [(5, 5), (0, 5), (5, 0), (0, 0)];
        for &(x, y) in &block {
            engine.add_cell(x, y);
        }
        let before = engine.current_generation();

        engine.step();
        engine.step();
        assert_eq!(engine.current_generation(), before);
    }

    #[test]
    fn test_birth_rule() {
        // Three alive neighbors: born
        let mut engine = empty_engine(6, 6);
        engine.add_cell(1, 1);
        engine.add_cell(2, 1);
        engine.add_cell(3, 1);
        assert_eq!(engine.count_neighbors(2, 2), 3);
        engine.step();
        assert!(engine.is_alive(2, 2));

        // Two: stays dead
        let mut engine = empty_engine(6, 6);
        engine.add_cell(1, 1);
        engine.add_cell(3, 1);
        assert_eq!(engine.count_neighbors(2, 2), 2);
        engine.step();
        assert!(!engine.is_alive(2, 2));

        // Four: stays dead
        let mut engine = empty_engine(6, 6);
        engine.add_cell(1, 1);
        engine.add_cell(3, 1);
        engine.add_cell(1, 3);
        engine.add_cell(3, 3);
        assert_eq!(engine.count_neighbors(2, 2), 4);
        engine.step();
        assert!(!engine.is_alive(2, 2));
    }

    #[test]
    fn test_survival_and_death_rule() {
        // Neighbors of (3, 3) filled in this order
        let ring = [
            (2, 2),
            (3, 2),
            (4, 2),
            (2, 3),
            (4, 3),
            (2, 4),
            (3, 4),
            (4, 4),
        ];

        for n in 0..=8usize {
            let mut engine = empty_engine(8, 8);
            engine.add_cell(3, 3);
            for &(x, y) in &ring[..n] {
                engine.add_cell(x, y);
            }
            assert_eq!(engine.count_neighbors(3, 3) as usize, n);

            engine.step();
            assert_eq!(
                engine.is_alive(3, 3),
                n == 2 || n == 3,
                "alive cell with {n} neighbors"
            );
        }
    }

    #[test]
    fn test_out_of_bounds_set_is_noop() {
        let mut engine = GridEngine::new(10, 12).unwrap();
        let before = engine.current_generation();

        engine.set_cell(-1, 0, true);
        engine.set_cell(12, 0, true);
        engine.set_cell(0, -1, true);
        engine.set_cell(0, 10, true);
        engine.set_cell(i32::MIN, i32::MAX, true);
        engine.remove_cell(-1, -1);

        assert_eq!(engine.current_generation(), before);
    }

    #[test]
    fn test_snapshot_isolation() {
        let engine = GridEngine::new(10, 10).unwrap();
        let mut snapshot = engine.current_generation();
        let original = snapshot.clone();

        snapshot.set(0, 0, true);
        snapshot.set(5, 5, false);
        assert_ne!(snapshot, original);

        assert_eq!(engine.current_generation(), original);
        assert!(!engine.is_alive(0, 0));
        assert!(engine.is_alive(5, 5));
    }

    #[test]
    fn test_seed_determinism() {
        for (height, width) in [(1, 1), (3, 3), (10, 10), (40, 60), (7, 31)] {
            let a = GridEngine::new(height, width).unwrap();
            let b = GridEngine::new(height, width).unwrap();
            assert_eq!(a.current_generation(), b.current_generation());
        }
    }

    #[test]
    fn test_seed_pattern_placement() {
        let engine = GridEngine::new(40, 60).unwrap();
        let grid = engine.current_generation();
        assert_eq!(grid.population(), SEED_OFFSETS.len());
        for &(dx, dy) in &SEED_OFFSETS {
            assert!(grid.get(30 + dx, 20 + dy));
        }
    }

    #[test]
    fn test_viewport_sized_engine() {
        let config = EngineConfig::from_viewport(640, 480, CELL_PIXEL_SIZE).unwrap();
        let mut engine = GridEngine::from_config(&config);
        assert_eq!(engine.width(), 64);
        assert_eq!(engine.height(), 48);

        let x = pixel_to_cell(125, CELL_PIXEL_SIZE);
        let y = pixel_to_cell(37, CELL_PIXEL_SIZE);
        engine.add_cell(x, y);
        assert!(engine.is_alive(12, 3));
    }

    #[test]
    fn test_ffi_round_trip() {
        unsafe {
            let engine = lg_create(5, 5);
            assert!(!engine.is_null());

            // Clear the seed, then place a vertical blinker
            for y in 0..5 {
                for x in 0..5 {
                    lg_set_cell(engine, x, y, 0);
                }
            }
            lg_set_cell(engine, 2, 1, 1);
            lg_set_cell(engine, 2, 2, 1);
            lg_set_cell(engine, 2, 3, 1);

            lg_step(engine);
            assert_eq!(lg_get_generation(engine), 1);
            assert_eq!(lg_get_cell(engine, 1, 2), 1);
            assert_eq!(lg_get_cell(engine, 2, 2), 1);
            assert_eq!(lg_get_cell(engine, 3, 2), 1);
            assert_eq!(lg_get_cell(engine, 2, 1), 0);

            let mut buffer = vec![0u8; 25];
            assert_eq!(lg_snapshot(engine, buffer.as_mut_ptr(), buffer.len()), 25);
            assert_eq!(buffer.iter().filter(|&&b| b == 1).count(), 3);
            assert_eq!(&buffer[10..15], &[0, 1, 1, 1, 0]);

            lg_destroy(engine);
        }
    }
}
