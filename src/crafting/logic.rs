use rand::Rng;

use super::types::{distribution_for, recipe_for, CraftOutcome, MaterialSelection, Recipe};
use crate::error::CoreError;
use crate::inventory::Inventory;
use crate::items::generation::generate_equipment;
use crate::items::types::{EquipSlot, Rarity};
use crate::materials::{MaterialId, Quality};

/// Combine the two selected qualities into the tier that keys the rarity
/// distribution. The base material counts double; the weighted average
/// index rounds to the nearest tier, half up.
pub fn combined_quality(base: Quality, secondary: Quality) -> Quality {
    let weighted = (2 * base.index() + secondary.index()) as f64 / 3.0;
    Quality::from_index(weighted.round() as usize)
}

/// The rarity distribution a craft with this selection would roll from.
pub fn preview_distribution(selection: &MaterialSelection) -> [f64; 6] {
    distribution_for(combined_quality(
        selection.base_quality,
        selection.secondary_quality,
    ))
}

/// Check that the inventory covers both recipe costs at the selected
/// qualities. Reports the first shortfall with have/need counts.
pub fn can_craft(
    recipe: &Recipe,
    selection: &MaterialSelection,
    inventory: &Inventory,
) -> Result<(), CoreError> {
    let base_id = MaterialId::new(recipe.base, selection.base_quality).key();
    let have = inventory.quantity(&base_id);
    if have < recipe.base_cost {
        return Err(CoreError::InsufficientMaterial {
            id: base_id,
            have,
            need: recipe.base_cost,
        });
    }

    let secondary_id = MaterialId::new(recipe.secondary, selection.secondary_quality).key();
    let have = inventory.quantity(&secondary_id);
    if have < recipe.secondary_cost {
        return Err(CoreError::InsufficientMaterial {
            id: secondary_id,
            have,
            need: recipe.secondary_cost,
        });
    }
    Ok(())
}

/// Inverse-CDF sample over the selection's rarity simplex: the first rarity
/// whose cumulative probability exceeds the uniform draw wins.
pub fn roll_rarity(selection: &MaterialSelection, rng: &mut impl Rng) -> Rarity {
    let distribution = preview_distribution(selection);
    let draw = rng.gen::<f64>();
    let mut cumulative = 0.0;
    for rarity in Rarity::ALL {
        cumulative += distribution[rarity.index()];
        if draw < cumulative {
            return rarity;
        }
    }
    // Float rounding can leave the final cumulative a hair under 1.0;
    // the draw then belongs to the last tier with any weight.
    Rarity::Legendary
}

/// Craft a piece of equipment: validate, deduct both material costs, roll
/// rarity and add the generated instance to the inventory.
///
/// Generation is total over slot × rarity, so once materials are spent the
/// craft cannot fail.
pub fn craft(
    slot: EquipSlot,
    selection: &MaterialSelection,
    inventory: &mut Inventory,
    rng: &mut impl Rng,
) -> Result<CraftOutcome, CoreError> {
    let recipe = recipe_for(slot);
    can_craft(recipe, selection, inventory)?;

    let base_id = MaterialId::new(recipe.base, selection.base_quality).key();
    let secondary_id = MaterialId::new(recipe.secondary, selection.secondary_quality).key();
    inventory.remove(&base_id, recipe.base_cost)?;
    inventory.remove(&secondary_id, recipe.secondary_cost)?;

    let distribution = preview_distribution(selection);
    let rarity = roll_rarity(selection, rng);
    let equipment = generate_equipment(slot, rarity, rng);
    let message = format!("Crafted {} ({})", equipment.name, rarity.name());
    log::debug!("{message}");

    let outcome = CraftOutcome {
        equipment: equipment.clone(),
        rarity,
        distribution,
        message,
    };
    inventory.add_equipment(equipment);
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combined_quality_weighting() {
        // Same tier on both inputs stays put
        for q in Quality::ALL {
            assert_eq!(combined_quality(q, q), q);
        }
        // Base counts double: (2*3 + 0) / 3 = 2
        assert_eq!(
            combined_quality(Quality::Rare, Quality::Normal),
            Quality::Fine
        );
        // (2*0 + 3) / 3 = 1
        assert_eq!(
            combined_quality(Quality::Normal, Quality::Rare),
            Quality::Good
        );
    }

    #[test]
    fn test_combined_quality_rounds_half_up() {
        // (2*1 + 0) / 3 = 0.67 rounds to 1
        assert_eq!(
            combined_quality(Quality::Good, Quality::Normal),
            Quality::Good
        );
        // (2*0 + 1) / 3 = 0.33 rounds to 0
        assert_eq!(
            combined_quality(Quality::Normal, Quality::Good),
            Quality::Normal
        );
        // (2*0 + 4) / 3 = 1.33 rounds to 1
        assert_eq!(
            combined_quality(Quality::Normal, Quality::Legendary),
            Quality::Good
        );
    }
}
