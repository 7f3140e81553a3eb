mod common;

use common::{fixture_teams, player, setup_store, team};
use nba_roster::storage::TeamStore;

#[tokio::test]
async fn test1_find_all_keeps_insertion_order() -> Result<(), Box<dyn std::error::Error>> {
    let store = setup_store(fixture_teams()).await?;

    let teams = store.find_all().await?;
    let names: Vec<_> = teams.iter().map(|t| t.team.name.as_str()).collect();
    assert_eq!(names, vec!["Utah Jazz", "Phoenix Suns", "Los Angeles Lakers"]);
    assert!(teams.windows(2).all(|w| w[0].id < w[1].id));
    Ok(())
}

#[tokio::test]
async fn test1_save_replaces_embedded_roster() -> Result<(), Box<dyn std::error::Error>> {
    let store = setup_store(vec![team("Miami Heat", "Heat", "Miami", vec![])]).await?;

    let mut heat = store.find_by_name("Miami Heat").await?.expect("fixture team");
    heat.team.players.push(player("Dwyane", "Wade", 27, "6-4"));
    heat.team.players.push(player("Udonis", "Haslem", 29, "6-8"));
    store.save(&heat).await?;

    let reloaded = store.find_by_name("Miami Heat").await?.expect("saved team");
    assert_eq!(reloaded, heat);
    Ok(())
}

#[tokio::test]
async fn test1_clear_all_players_keeps_team_metadata() -> Result<(), Box<dyn std::error::Error>> {
    let store = setup_store(fixture_teams()).await?;
    let before = store.find_all().await?;

    store.clear_all_players().await?;

    let after = store.find_all().await?;
    assert_eq!(after.len(), before.len());
    for (old, new) in before.iter().zip(&after) {
        assert_eq!(old.id, new.id);
        assert_eq!(old.team.name, new.team.name);
        assert_eq!(old.team.mascot, new.team.mascot);
        assert_eq!(old.team.city, new.team.city);
        assert!(new.team.players.is_empty());
    }
    Ok(())
}

#[tokio::test]
async fn test1_delete_all_teams_empties_collection() -> Result<(), Box<dyn std::error::Error>> {
    let store = setup_store(fixture_teams()).await?;

    store.delete_all_teams().await?;

    assert!(store.find_all().await?.is_empty());
    assert!(store.find_by_name("Utah Jazz").await?.is_none());
    Ok(())
}
