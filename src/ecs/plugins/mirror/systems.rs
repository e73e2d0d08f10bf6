use bevy::prelude::*;

use crate::ecs::plugins::pets::Pets;
use crate::ecs::plugins::player::{Hands, Player};

/// Deployment policy, not mechanism: every tick the pet wears whatever the
/// player holds, and stops tilting its head while the off-hand is occupied.
pub fn hand_mirror_system(pets: Res<Pets>, players: Query<(&Player, &Hands)>) {
    for (player, hands) in players.iter() {
        pets.set_display(player.id, hands.main_hand.clone());
        pets.set_rotate_z_of(player.id, hands.off_hand.is_none());
    }
}
