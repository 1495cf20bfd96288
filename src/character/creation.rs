use super::types::{Character, CharacterClass};
use crate::core::constants::{MAX_NAME_LENGTH, STARTING_GOLD, STARTING_LEVEL};
use crate::error::CreationError;
use crate::items::Equipment;
use uuid::Uuid;

/// Name rules of the creation form: non-blank, at most 16 characters,
/// letters, digits, spaces, hyphens, and underscores.
pub fn validate_name(name: &str) -> Result<(), CreationError> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return Err(CreationError::EmptyName);
    }

    if trimmed.chars().count() > MAX_NAME_LENGTH {
        return Err(CreationError::NameTooLong {
            max: MAX_NAME_LENGTH,
        });
    }

    let valid_chars = trimmed
        .chars()
        .all(|c| c.is_alphanumeric() || c == ' ' || c == '-' || c == '_');

    if !valid_chars {
        return Err(CreationError::InvalidCharacters);
    }

    Ok(())
}

/// Creates a level 1 hero from the class template.
///
/// Only a blank name is refused. The length and character rules of
/// [`validate_name`] belong to the name entry form.
pub fn create_character(name: &str, class: CharacterClass) -> Result<Character, CreationError> {
    if name.trim().is_empty() {
        return Err(CreationError::EmptyName);
    }

    Ok(Character {
        id: Uuid::new_v4(),
        name: name.trim().to_string(),
        class,
        level: STARTING_LEVEL,
        experience: 0,
        stats: class.template().base_stats(),
        inventory: Vec::new(),
        equipment: Equipment::new(),
        gold: STARTING_GOLD,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name_valid() {
        assert!(validate_name("Hero").is_ok());
        assert!(validate_name("Sir Galahad").is_ok());
        assert!(validate_name("dark-knight_42").is_ok());
        assert!(validate_name("  padded  ").is_ok());
    }

    #[test]
    fn test_validate_name_empty() {
        assert_eq!(validate_name(""), Err(CreationError::EmptyName));
        assert_eq!(validate_name("   "), Err(CreationError::EmptyName));
    }

    #[test]
    fn test_validate_name_too_long() {
        assert!(validate_name("Sixteen Chars Ok").is_ok());
        assert_eq!(
            validate_name("Seventeen chars!!"),
            Err(CreationError::NameTooLong { max: 16 })
        );
    }

    #[test]
    fn test_validate_name_invalid_characters() {
        assert_eq!(validate_name("Hero!"), Err(CreationError::InvalidCharacters));
        assert_eq!(validate_name("a/b"), Err(CreationError::InvalidCharacters));
    }

    #[test]
    fn test_create_character_defaults() {
        let hero = create_character("  Aria ", CharacterClass::Mage).unwrap();
        assert_eq!(hero.name, "Aria");
        assert_eq!(hero.class, CharacterClass::Mage);
        assert_eq!(hero.level, 1);
        assert_eq!(hero.experience, 0);
        assert_eq!(hero.gold, 100);
        assert!(hero.inventory.is_empty());
        assert_eq!(hero.equipment, Equipment::new());
        assert_eq!(hero.stats, CharacterClass::Mage.template().base_stats());
    }

    #[test]
    fn test_create_character_rejects_blank_name() {
        assert_eq!(
            create_character(" ", CharacterClass::Warrior),
            Err(CreationError::EmptyName)
        );
    }

    #[test]
    fn test_create_character_accepts_names_the_form_would_refuse() {
        let hero = create_character("O'Brien", CharacterClass::Warrior).unwrap();
        assert_eq!(hero.name, "O'Brien");

        let long_name = "Sir Lancelot du Lake";
        assert_eq!(long_name.chars().count(), 20);
        let hero = create_character(long_name, CharacterClass::Mage).unwrap();
        assert_eq!(hero.name, long_name);

        assert!(create_character("Zoë.", CharacterClass::Archer).is_ok());
    }

    #[test]
    fn test_each_character_gets_fresh_id() {
        let a = create_character("A", CharacterClass::Archer).unwrap();
        let b = create_character("A", CharacterClass::Archer).unwrap();
        assert_ne!(a.id, b.id);
    }
}
