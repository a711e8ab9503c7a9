#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::num::NonZero;

    use strum::VariantArray;

    use crate::direction::Direction;
    use crate::grid::{intersections, Grid};
    use crate::location::Location;
    use crate::puzzle::{Placement, Puzzle};
    use crate::word::WordEntry;
    use crate::{generate, Generator};

    fn fruit_entries() -> Vec<WordEntry> {
        vec![
            WordEntry::new("apple", "keeps the doctor away"),
            WordEntry::new("grape", "wine source"),
            WordEntry::new("lemon", "sour citrus"),
            WordEntry::new("mango", "tropical stone fruit"),
            WordEntry::new("pear", "bartlett, for one"),
        ]
    }

    #[test]
    fn empty_input() {
        assert_eq!(generate(&[]), None);
    }

    #[test]
    fn input_with_no_letters() {
        let entries = [
            WordEntry::new("24/7", "always on"),
            WordEntry::new("---", "dashes"),
        ];
        assert_eq!(generate(&entries), None);
    }

    #[test]
    fn single_word_layout() {
        let puzzle = generate(&[WordEntry::new("h e-llo!", "greeting")]).unwrap();

        assert_eq!(format!("{}", puzzle), "HELLO\n");
        assert_eq!((puzzle.width, puzzle.height), (5, 1));
        assert_eq!(puzzle.word_count(), 1);

        let word = &puzzle.words[0];
        assert_eq!(word.word, "HELLO");
        assert_eq!((word.x, word.y), (0, 0));
        assert_eq!(word.direction, Direction::Across);
        assert_eq!(word.number, 1);
        assert_eq!(puzzle.cell(Location(0, 0)).unwrap().number, Some(1));
    }

    #[test]
    fn disjoint_words_leave_second_unplaced() {
        let entries = [
            WordEntry::new("zebra", "striped grazer"),
            WordEntry::new("quilt", "patchwork blanket"),
        ];
        let puzzle = generate(&entries).unwrap();

        // no shared letters, so only the seed word fits
        assert_eq!(puzzle.word_count(), 1);
        assert_eq!(puzzle.words[0].word, "ZEBRA");
        assert_eq!(format!("{}", puzzle), "ZEBRA\n");
    }

    #[test]
    fn two_letter_words_connect() {
        let entries = [WordEntry::new("ab", "first"), WordEntry::new("ba", "second")];
        let puzzle = generate(&entries).unwrap();

        // BA anchors its B on the seed's B and runs down
        assert_eq!(format!("{}", puzzle), "AB\n.A\n");
        assert_eq!(puzzle.words[0].number, 1);
        assert_eq!(puzzle.words[1].number, 2);
    }

    #[test]
    fn connected_words_intersect() {
        let entries = [
            WordEntry::new("cat", "pet"),
            WordEntry::new("car", "vehicle"),
            WordEntry::new("art", "craft"),
        ];
        let puzzle = generate(&entries).unwrap();

        assert!(puzzle.word_count() >= 2);

        // every non-seed word is anchored on a shared letter, so some cell is doubly used
        let total_letters: usize = puzzle.words.iter().map(|w| w.word.len()).sum();
        assert!(puzzle.cells.len() < total_letters);
    }

    #[test]
    fn words_agree_with_cells() {
        let puzzle = Generator::default()
            .seed(11)
            .generate(&fruit_entries())
            .unwrap();

        let mut covered = HashSet::new();
        for word in &puzzle.words {
            for (i, letter) in word.word.chars().enumerate() {
                let at = word.direction.advance(Location(word.x, word.y), i as i32);
                assert_eq!(puzzle.cell(at).unwrap().char, letter);
                covered.insert(at);
            }
        }

        // every cell is reachable by walking some word
        let occupied: HashSet<Location> = puzzle.cells.keys().copied().collect();
        assert_eq!(covered, occupied);
    }

    #[test]
    fn bounding_box_is_tight() {
        let puzzle = Generator::default()
            .seed(3)
            .generate(&fruit_entries())
            .unwrap();

        let xs: Vec<_> = puzzle.cells.keys().map(|l| l.0).collect();
        let ys: Vec<_> = puzzle.cells.keys().map(|l| l.1).collect();

        assert_eq!(xs.iter().min(), Some(&0));
        assert_eq!(ys.iter().min(), Some(&0));
        assert_eq!(xs.iter().max(), Some(&(puzzle.width - 1)));
        assert_eq!(ys.iter().max(), Some(&(puzzle.height - 1)));
    }

    #[test]
    fn same_seed_same_puzzle() {
        let entries = fruit_entries();
        let first = Generator::default().seed(7).generate(&entries).unwrap();
        let second = Generator::default().seed(7).generate(&entries).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn single_attempt_still_generates() {
        let puzzle = Generator::default()
            .attempts(NonZero::new(1).unwrap())
            .seed(5)
            .generate(&fruit_entries())
            .unwrap();

        assert!(puzzle.word_count() >= 1);
    }

    #[test]
    fn intersections_are_row_major() {
        assert_eq!(intersections("CAT", "ART"), vec![(1, 0), (2, 2)]);
        assert_eq!(intersections("ART", "CAT"), vec![(0, 1), (2, 2)]);
        assert_eq!(intersections("ZEBRA", "QUILT"), vec![]);
    }

    #[test]
    fn validator_accepts_matching_overlap() {
        let mut grid = Grid::default();
        grid.place("CAT", Location(0, 0), Direction::Across);

        assert!(grid.can_place("COT", Location(0, 0), Direction::Down));
    }

    #[test]
    fn validator_rejects_letter_collision() {
        let mut grid = Grid::default();
        grid.place("CAT", Location(0, 0), Direction::Across);

        assert!(!grid.can_place("DOG", Location(0, 0), Direction::Down));
    }

    #[test]
    fn validator_rejects_flush_parallel_run() {
        let mut grid = Grid::default();
        grid.place("CAT", Location(0, 0), Direction::Across);

        // ON would sit directly under CA with no crossing
        assert!(!grid.can_place("ON", Location(0, 1), Direction::Across));
    }

    #[test]
    fn validator_rejects_end_extension() {
        for &direction in Direction::VARIANTS {
            let mut grid = Grid::default();
            grid.place("CAT", Location(0, 0), direction);

            // neither appending after the T nor ending right before the C is allowed
            assert!(!grid.can_place("AT", direction.advance(Location(0, 0), 3), direction));
            assert!(!grid.can_place("TA", direction.advance(Location(0, 0), -2), direction));
        }
    }

    #[test]
    fn shared_start_cell_shares_its_number() {
        // both words start on the same A, crossing at their first letters
        let placements = vec![
            Placement {
                entry: WordEntry::new("AB", "first across"),
                start: Location(5, 3),
                direction: Direction::Across,
            },
            Placement {
                entry: WordEntry::new("AC", "first down"),
                start: Location(5, 3),
                direction: Direction::Down,
            },
        ];
        let puzzle = Puzzle::from_placements(placements);

        assert_eq!(format!("{}", puzzle), "AB\nC.\n");
        assert_eq!(puzzle.words[0].number, 1);
        assert_eq!(puzzle.words[1].number, 1);
        assert_eq!(puzzle.cell(Location(0, 0)).unwrap().number, Some(1));
        assert_eq!(puzzle.cell(Location(1, 0)).unwrap().number, None);
    }

    #[test]
    fn normalization_is_idempotent() {
        let puzzle = Generator::default()
            .seed(13)
            .generate(&fruit_entries())
            .unwrap();

        let replayed = Puzzle::from_placements(
            puzzle
                .words
                .iter()
                .map(|w| Placement {
                    entry: WordEntry::new(w.word.clone(), w.clue.clone()),
                    start: Location(w.x, w.y),
                    direction: w.direction,
                })
                .collect(),
        );

        assert_eq!(replayed, puzzle);
    }

    #[test]
    fn serializes_in_stored_shape() {
        let entries = [
            WordEntry::new("cat", "pet"),
            WordEntry::new("car", "vehicle"),
            WordEntry::new("art", "craft"),
        ];
        let puzzle = Generator::default().seed(2).generate(&entries).unwrap();
        let value = serde_json::to_value(&puzzle).unwrap();

        for (key, cell) in value["cells"].as_object().unwrap() {
            let (x, y) = key.split_once(',').unwrap();
            assert_eq!(x.parse::<i32>().unwrap(), cell["x"].as_i64().unwrap() as i32);
            assert_eq!(y.parse::<i32>().unwrap(), cell["y"].as_i64().unwrap() as i32);
        }

        for word in value["words"].as_array().unwrap() {
            assert!(matches!(word["direction"].as_str(), Some("across" | "down")));
        }

        let first = &puzzle.words[0];
        let start_key = format!("{},{}", first.x, first.y);
        assert_eq!(
            value["cells"][&start_key]["number"].as_u64(),
            Some(u64::from(first.number))
        );

        let round_tripped: Puzzle = serde_json::from_value(value).unwrap();
        assert_eq!(round_tripped, puzzle);
    }
}
