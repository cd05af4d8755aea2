use std::fs;
use std::path::Path;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::AppError;

/// The fixed list of creature types a draw picks from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Catalog {
    entries: Vec<String>,
}

impl Catalog {
    /// Parse newline-delimited text: one entry per non-blank line, trimmed.
    pub(crate) fn parse(text: &str) -> Self {
        let entries = text
            .trim_start_matches('\u{feff}')
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect();
        Catalog { entries }
    }

    pub(crate) fn load(path: &Path) -> Result<Self, AppError> {
        let text = fs::read_to_string(path).map_err(|source| AppError::CatalogRead {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&text))
    }

    pub(crate) fn entries(&self) -> &[String] {
        &self.entries
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn ensure_non_empty(&self) -> Result<(), AppError> {
        if self.is_empty() {
            return Err(AppError::EmptyCatalog);
        }
        Ok(())
    }

    /// Uniformly pick one entry.
    pub(crate) fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&str, AppError> {
        self.entries
            .choose(rng)
            .map(String::as_str)
            .ok_or(AppError::EmptyCatalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Write;

    #[test]
    fn parse_skips_blank_lines_and_trims() {
        let catalog = Catalog::parse("Elf\n\n  Goblin  \r\n\t\nZombie\n");
        assert_eq!(catalog.entries(), ["Elf", "Goblin", "Zombie"]);
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn parse_strips_byte_order_mark() {
        let catalog = Catalog::parse("\u{feff}Angel\nDemon\n");
        assert_eq!(catalog.entries(), ["Angel", "Demon"]);
    }

    #[test]
    fn parse_keeps_duplicates_in_file_order() {
        let catalog = Catalog::parse("Elf\nElf\nGoblin\n");
        assert_eq!(catalog.entries(), ["Elf", "Elf", "Goblin"]);
    }

    #[test]
    fn blank_text_is_empty_catalog() {
        let catalog = Catalog::parse("\n   \n\n");
        assert!(catalog.is_empty());
        assert!(matches!(
            catalog.ensure_non_empty(),
            Err(AppError::EmptyCatalog)
        ));
    }

    #[test]
    fn choose_from_empty_catalog_fails() {
        let catalog = Catalog::default();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            catalog.choose(&mut rng),
            Err(AppError::EmptyCatalog)
        ));
    }

    #[test]
    fn choose_returns_catalog_member() {
        let catalog = Catalog::parse("Elf\nGoblin\nMerfolk\n");
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let picked = catalog.choose(&mut rng).unwrap();
            assert!(catalog.entries().iter().any(|e| e == picked));
        }
    }

    #[test]
    fn choose_is_reproducible_with_same_seed() {
        let catalog = Catalog::parse("Elf\nGoblin\nMerfolk\nZombie\nDragon\n");
        let draw = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..10)
                .map(|_| catalog.choose(&mut rng).unwrap().to_string())
                .collect::<Vec<_>>()
        };
        assert_eq!(draw(7), draw(7));
    }

    #[test]
    fn choose_reaches_every_entry() {
        let catalog = Catalog::parse("Elf\nGoblin\nMerfolk\n");
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..300 {
            seen.insert(catalog.choose(&mut rng).unwrap().to_string());
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Human\nWizard\n").unwrap();
        let catalog = Catalog::load(file.path()).unwrap();
        assert_eq!(catalog.entries(), ["Human", "Wizard"]);
    }

    #[test]
    fn load_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Catalog::load(&dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, AppError::CatalogRead { .. }));
    }
}
