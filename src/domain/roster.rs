//! Entities and the roster that names them.

use serde::Serialize;

use crate::error::ModelError;

/// Index of a movable entity within a roster.
///
/// Entities carry no identity of their own; the roster they index into
/// supplies the name and table code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Entity(usize);

impl Entity {
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A named entity with its single-character table code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    name: String,
    code: char,
}

impl Member {
    #[must_use]
    pub fn new(name: impl Into<String>, code: char) -> Self {
        Self {
            name: name.into(),
            code,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn code(&self) -> char {
        self.code
    }
}

/// Ordered cast of the entities taking part in a crossing.
///
/// Entity indices are positions in this roster. Names and codes must be
/// unique; codes are the only identification in the rendered step table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    members: Vec<Member>,
}

impl Roster {
    /// Validate and build a roster.
    pub fn new(members: Vec<Member>) -> Result<Self, ModelError> {
        if members.is_empty() {
            return Err(ModelError::EmptyRoster);
        }
        for (i, member) in members.iter().enumerate() {
            for earlier in &members[..i] {
                if earlier.name() == member.name() {
                    return Err(ModelError::DuplicateName {
                        name: member.name().to_string(),
                    });
                }
                if earlier.code() == member.code() {
                    return Err(ModelError::DuplicateCode {
                        code: member.code(),
                    });
                }
            }
        }
        Ok(Self { members })
    }

    /// The classic cast: wolf, goat and cabbage.
    #[must_use]
    pub fn wolf_goat_cabbage() -> Self {
        Self {
            members: vec![
                Member::new("wolf", 'w'),
                Member::new("goat", 'g'),
                Member::new("cabbage", 'k'),
            ],
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    #[must_use]
    pub fn get(&self, entity: Entity) -> Option<&Member> {
        self.members.get(entity.index())
    }

    /// Entity whose member carries the given name.
    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<Entity> {
        self.members
            .iter()
            .position(|m| m.name() == name)
            .map(Entity::new)
    }

    pub fn entities(&self) -> impl Iterator<Item = Entity> + '_ {
        (0..self.members.len()).map(Entity::new)
    }

    #[must_use]
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// Join the codes of the given entities, in the order provided.
    #[must_use]
    pub fn codes(&self, entities: &[Entity]) -> String {
        entities
            .iter()
            .filter_map(|e| self.get(*e))
            .map(Member::code)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wolf_goat_cabbage_cast() {
        let roster = Roster::wolf_goat_cabbage();
        assert_eq!(roster.len(), 3);
        let all: Vec<Entity> = roster.entities().collect();
        assert_eq!(roster.codes(&all), "wgk");
        assert_eq!(roster.index_of("goat"), Some(Entity::new(1)));
        assert_eq!(roster.index_of("farmer"), None);
    }

    #[test]
    fn test_empty_roster_rejected() {
        assert_eq!(Roster::new(vec![]), Err(ModelError::EmptyRoster));
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let result = Roster::new(vec![Member::new("wolf", 'w'), Member::new("wolf", 'x')]);
        assert_eq!(
            result,
            Err(ModelError::DuplicateName {
                name: "wolf".to_string()
            })
        );
    }

    #[test]
    fn test_duplicate_code_rejected() {
        let result = Roster::new(vec![Member::new("wolf", 'w'), Member::new("weasel", 'w')]);
        assert_eq!(result, Err(ModelError::DuplicateCode { code: 'w' }));
    }

    #[test]
    fn test_codes_skip_out_of_roster_entities() {
        let roster = Roster::wolf_goat_cabbage();
        assert_eq!(roster.codes(&[Entity::new(0), Entity::new(9)]), "w");
    }
}
