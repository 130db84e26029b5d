use crate::battle::state::{Army, BattleState, TroopGroup};
use crate::rules::Rules;
use schema::{TroopAttributes, TroopType};

/// A builder for creating test troop groups with common defaults.
///
/// # Example
/// ```
/// let group = TestGroupBuilder::new(TroopType::Infantry, 1)
///     .with_quantity(500)
///     .at_position(200)
///     .build();
/// ```
pub struct TestGroupBuilder {
    kind: TroopType,
    tier: u8,
    quantity: u32,
    attributes: Option<TroopAttributes>,
    position: u32,
}

impl TestGroupBuilder {
    /// Creates a new builder for a given kind and tier.
    pub fn new(kind: TroopType, tier: u8) -> Self {
        Self {
            kind,
            tier,
            quantity: 1000,
            attributes: None,
            position: 0,
        }
    }

    /// Sets the quantity for the test group.
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Overrides the attributes instead of resolving them from the
    /// standard tables.
    pub fn with_attributes(mut self, attributes: TroopAttributes) -> Self {
        self.attributes = Some(attributes);
        self
    }

    /// Places the group at a battlefield position. If not set, the group
    /// starts at 0.
    pub fn at_position(mut self, position: u32) -> Self {
        self.position = position;
        self
    }

    /// Builds the `TroopGroup`.
    pub fn build(self) -> TroopGroup {
        let attributes = match self.attributes {
            Some(attributes) => attributes,
            None => match standard_rules().troop_attributes(self.kind, self.tier) {
                Some(attributes) => attributes,
                None => panic!("No attributes for {:?} T{}", self.kind, self.tier),
            },
        };

        TroopGroup {
            kind: self.kind,
            tier: self.tier,
            quantity: self.quantity,
            attributes,
            position: self.position,
        }
    }
}

/// The standard balance tables, shared by every test that does not need
/// custom numbers.
pub fn standard_rules() -> Rules {
    Rules::standard()
}

/// Shorthand for hand-rolled attribute sets.
pub fn attrs(attack: u32, defense: u32, hp: u32, speed: u32, range: u32) -> TroopAttributes {
    TroopAttributes {
        attack,
        defense,
        hp,
        speed,
        range,
    }
}

/// Creates an army with default buffs from a list of groups.
pub fn create_test_army(troops: Vec<TroopGroup>) -> Army {
    Army::new(troops)
}

/// Creates a battle on the standard battlefield, with army 1 lined up at
/// the left edge and army 2 at the right edge.
pub fn create_test_battle(
    army1_troops: Vec<TroopGroup>,
    army2_troops: Vec<TroopGroup>,
) -> BattleState {
    let rules = standard_rules();
    BattleState::new(
        create_test_army(army1_troops),
        create_test_army(army2_troops),
        rules.battlefield_width(),
    )
}
