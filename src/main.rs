mod battle;
mod composition;
mod errors;
mod prefab_armies;
mod rules;

use composition::ArmyBuilder;
use prefab_armies::{create_army_from_prefab, get_prefab_armies};
use rules::Rules;
use schema::TroopType;
use std::path::Path;

fn main() {
    let data_path = Path::new("data");

    // Load and validate the balance tables first
    let rules = match Rules::load(data_path) {
        Ok(rules) => rules,
        Err(e) => {
            println!("Error loading rules data: {}", e);
            return;
        }
    };

    // Example 1: Inspect the loaded tables
    println!("Loaded battle rules:");
    println!("  Battlefield width: {}", rules.battlefield_width());
    if let Some(infantry) = rules.troop_attributes(TroopType::Infantry, 1) {
        println!(
            "  Infantry T1: ATK:{} DEF:{} HP:{} SPD:{} RNG:{}",
            infantry.attack, infantry.defense, infantry.hp, infantry.speed, infantry.range
        );
    }
    if let Some(siege) = rules.troop_attributes(TroopType::Siege, 16) {
        println!(
            "  Siege T16: ATK:{} DEF:{} HP:{} SPD:{} RNG:{}",
            siege.attack, siege.defense, siege.hp, siege.speed, siege.range
        );
    }

    println!();

    // Example 2: Compose an army with the builder
    let mut builder = ArmyBuilder::new();
    builder.fill_all(0);
    builder.fill_kind(TroopType::Cavalry, 800);
    match builder.build(&rules) {
        Ok(army) => {
            println!("Composed a cavalry-only army:");
            println!("  Groups: {}", army.troops.len());
            println!("  Units: {}", army.unit_count());
        }
        Err(e) => println!("Error composing army: {}", e),
    }

    println!();

    // Example 3: List the prefab armies
    println!("Available prefab armies:");
    for prefab in get_prefab_armies() {
        println!("  {} - {}", prefab.name, prefab.description);
    }

    println!();

    // Example 4: Prefab vs prefab battle demo
    println!("=== Prefab Battle Demo ===");
    run_prefab_battle_demo(&rules);
}

fn run_prefab_battle_demo(rules: &Rules) {
    use battle::runner::BattleRunner;

    let army1 = match create_army_from_prefab("royal_retinue", rules) {
        Ok(army) => army,
        Err(e) => {
            println!("Error building army 1: {}", e);
            return;
        }
    };

    let army2 = match create_army_from_prefab("border_garrison", rules) {
        Ok(army) => army,
        Err(e) => {
            println!("Error building army 2: {}", e);
            return;
        }
    };

    let mut battle_runner = BattleRunner::new(rules.clone(), army1, army2);

    println!("🔥 Battle begins!");
    let battle_info = battle_runner.get_battle_info();
    println!(
        "  Army 1 fields {} groups ({} units)",
        battle_info.armies[0].group_count, battle_info.armies[0].unit_count
    );
    println!(
        "  Army 2 fields {} groups ({} units)",
        battle_info.armies[1].group_count, battle_info.armies[1].unit_count
    );
    println!();

    let mut execution_count = 0;

    // Battle loop - continue until one army is wiped out
    while !battle_runner.is_battle_ended() {
        match battle_runner.advance_round() {
            Ok(result) => {
                for event in &result.events {
                    if let Some(line) = event.format() {
                        println!("  {}", line);
                    }
                }

                let battle_info = battle_runner.get_battle_info();
                println!(
                    "  Army 1: {} groups, {} units | Army 2: {} groups, {} units",
                    battle_info.armies[0].group_count,
                    battle_info.armies[0].unit_count,
                    battle_info.armies[1].group_count,
                    battle_info.armies[1].unit_count
                );
                println!();

                execution_count += 1;

                // Safety check to prevent endless stalemates
                if execution_count > 50 {
                    println!("Battle reached round limit - ending demo");
                    break;
                }
            }
            Err(e) => {
                println!("Error advancing battle: {}", e);
                break;
            }
        }
    }

    // Announce the winner
    if let Some(winner_index) = battle_runner.get_winner() {
        println!("🏆 Army {} wins the battle!", winner_index + 1);
    } else if battle_runner.is_battle_ended() {
        println!("🤝 The battle ended in a draw!");
    } else {
        println!("🔚 Battle ended (round limit reached)");
    }

    println!(
        "Battle completed after {} round(s).",
        battle_runner.rounds_simulated()
    );
}
