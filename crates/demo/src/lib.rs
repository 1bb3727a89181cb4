//! Player demonstration for reflekt.
//!
//! Declares a `Player` with three reflected fields, prints them, changes
//! them, and prints them again. The second listing shows that the registry
//! reads live field values rather than snapshots taken at registration.

pub mod config;
pub mod tracing_setup;

use reflekt_core::ReflectError;
use reflekt_core::kind::PropertyValue;
use reflekt_core::reflect::{Reflect, Registries};
use std::io::Write;

/// The demonstration reflecting type.
#[derive(Debug, Clone, PartialEq, Reflect)]
pub struct Player {
    /// Hit points.
    #[property(rename = "Health", meta = "VisibleAnywhere")]
    pub health: i32,

    /// Display name.
    #[property(rename = "Name", meta = "EditAnywhere")]
    pub name: String,

    /// Movement speed.
    #[property(rename = "Speed", meta = "VisibleAnywhere")]
    pub speed: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            health: 100,
            name: "Zoran".to_string(),
            speed: 2.0,
        }
    }
}

/// Writes a banner line followed by every property of `player`.
///
/// # Errors
///
/// Returns [`ReflectError::Io`] if writing to `out` fails.
pub fn print_section(
    registries: &Registries,
    player: &Player,
    banner: &str,
    out: &mut impl Write,
) -> Result<(), ReflectError> {
    writeln!(out, "=== {banner} ===")?;
    player.get_registry(registries).print_all(player, out)
}

/// Runs the fixed demonstration sequence, writing everything to `out`.
///
/// Returns the player in its final state.
///
/// # Errors
///
/// Returns [`ReflectError::Io`] if writing to `out` fails.
pub fn run(registries: &Registries, out: &mut impl Write) -> Result<Player, ReflectError> {
    let mut player = Player::default();

    print_section(registries, &player, "Initial", out)?;

    player.health = 250;
    player.name = "Neo".to_string();
    player.speed = 5.0;
    tracing::debug!(?player, "player modified");

    writeln!(out)?;
    print_section(registries, &player, "After Changes", out)?;

    writeln!(
        out,
        "\nDirect access: Health={}, Name={}, Speed={}",
        player.health,
        player.name,
        PropertyValue::Float(player.speed)
    )?;

    Ok(player)
}
