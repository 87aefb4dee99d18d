//! Canned payloads for endpoints whose analytics engines are not wired up
//! yet. Handlers echo request identity fields into these fixtures so the
//! response shape is stable for API consumers.

use chrono::Utc;

use crate::models::analytics::{
    AvoidChampion, BanPriority, BaselineRankings, BaselineStats, ChampionHistoricalPerformance,
    ChampionPick, ChampionPowerTimeline, ChampionRecommendation, ChampionTrend, ComparisonStats,
    CounterPick, DashboardChanges, DecliningChampion, DraftAnalysis, EmergingChampion, FlexPick,
    LeagueMeta, LeagueMetaComparison, MatchPrediction, MetaShiftAlert, PatchEvolution, PatchWeek,
    PickPriority, PlayerComparison, PlayerNote, PlayerPerformanceAlert, RecommendationSituation,
    SeasonRecord, StableChampion, TeamComposition, TimelinePoint,
};

pub fn dashboard_changes() -> DashboardChanges {
    DashboardChanges {
        matches_this_week: 42,
        new_champions: 3,
        active_players_change: 12,
        game_length_change_sec: -48.0,
        kills_change: 1.4,
        blue_side_change: 0.8,
    }
}

pub fn comparison_stats() -> ComparisonStats {
    ComparisonStats {
        lck_mid_avg: BaselineStats {
            kda: 4.2,
            damage: 27.5,
            gold: 415.0,
        },
        rankings: BaselineRankings {
            kda: 3,
            damage: 5,
            gold: 4,
        },
    }
}

pub fn power_timeline(champion_name: &str) -> ChampionPowerTimeline {
    ChampionPowerTimeline {
        champion_name: champion_name.to_string(),
        win_rate_by_minute: vec![
            TimelinePoint { minute: 10, win_rate: 48.2 },
            TimelinePoint { minute: 15, win_rate: 49.5 },
            TimelinePoint { minute: 20, win_rate: 51.0 },
            TimelinePoint { minute: 25, win_rate: 52.8 },
            TimelinePoint { minute: 30, win_rate: 54.1 },
            TimelinePoint { minute: 35, win_rate: 55.3 },
            TimelinePoint { minute: 40, win_rate: 56.0 },
        ],
        strengths: vec![
            "Scales well into late game".to_string(),
            "Strong objective setup after level 11".to_string(),
        ],
    }
}

pub fn player_comparisons(player_ids: &[String]) -> Vec<PlayerComparison> {
    const TEMPLATES: [(i64, f64, f64, f64, f64, f64, i64, &str); 3] = [
        (18, 61.1, 4.8, 612.0, 428.0, 9.2, 7, "Azir"),
        (17, 52.9, 3.9, 545.0, 401.0, 8.8, 6, "Ahri"),
        (16, 50.0, 3.4, 498.0, 387.0, 8.4, 5, "Sylas"),
    ];

    player_ids
        .iter()
        .enumerate()
        .map(|(i, id)| {
            let (games, win_rate, kda, dpm, gpm, cspm, pool_size, champion) =
                TEMPLATES[i % TEMPLATES.len()];
            PlayerComparison {
                player_id: id.clone(),
                player_name: id.clone(),
                games,
                win_rate,
                kda,
                dpm,
                gpm,
                cspm,
                champion_pool_size: pool_size,
                most_played_champion: champion.to_string(),
            }
        })
        .collect()
}

pub fn draft_analysis() -> DraftAnalysis {
    DraftAnalysis {
        pick_priority: vec![
            PickPriority {
                champion_name: "Azir".to_string(),
                role: "mid".to_string(),
                first_pick_win_rate: 54.8,
                first_picks_count: 41,
            },
            PickPriority {
                champion_name: "Aurora".to_string(),
                role: "mid".to_string(),
                first_pick_win_rate: 53.2,
                first_picks_count: 37,
            },
            PickPriority {
                champion_name: "K'Sante".to_string(),
                role: "top".to_string(),
                first_pick_win_rate: 52.1,
                first_picks_count: 33,
            },
        ],
        ban_priority: vec![
            BanPriority {
                champion_name: "Aurora".to_string(),
                ban_rate: 34.2,
                total_games_in_patch: 412,
            },
            BanPriority {
                champion_name: "Yone".to_string(),
                ban_rate: 28.7,
                total_games_in_patch: 412,
            },
            BanPriority {
                champion_name: "Azir".to_string(),
                ban_rate: 25.1,
                total_games_in_patch: 412,
            },
        ],
        flex_picks: vec![
            FlexPick {
                champion_name: "K'Sante".to_string(),
                roles: vec!["top".to_string(), "mid".to_string()],
                global_win_rate: 52.4,
            },
            FlexPick {
                champion_name: "Sylas".to_string(),
                roles: vec!["mid".to_string(), "top".to_string()],
                global_win_rate: 50.8,
            },
            FlexPick {
                champion_name: "Taliyah".to_string(),
                roles: vec!["mid".to_string(), "jng".to_string()],
                global_win_rate: 49.9,
            },
        ],
        counter_picks: vec![
            CounterPick {
                champion_name: "Sylas".to_string(),
                vs_champion: "Azir".to_string(),
                win_rate: 53.6,
                games: 64,
            },
            CounterPick {
                champion_name: "Yone".to_string(),
                vs_champion: "Ahri".to_string(),
                win_rate: 52.2,
                games: 58,
            },
            CounterPick {
                champion_name: "Jax".to_string(),
                vs_champion: "K'Sante".to_string(),
                win_rate: 51.4,
                games: 47,
            },
        ],
    }
}

pub fn winning_compositions() -> Vec<TeamComposition> {
    vec![
        TeamComposition {
            name: "Teamfight".to_string(),
            win_rate: 56.2,
            games: 148,
            description: "Five-man engage around a scaling carry".to_string(),
            example_champions: vec![
                "Azir".to_string(),
                "Orianna".to_string(),
                "Sejuani".to_string(),
            ],
        },
        TeamComposition {
            name: "Pick".to_string(),
            win_rate: 53.8,
            games: 121,
            description: "Vision control and numbers-advantage skirmishes".to_string(),
            example_champions: vec![
                "Ahri".to_string(),
                "Nocturne".to_string(),
                "Pyke".to_string(),
            ],
        },
        TeamComposition {
            name: "Split push".to_string(),
            win_rate: 51.5,
            games: 96,
            description: "Side-lane pressure with a 1-3-1 setup".to_string(),
            example_champions: vec![
                "Jax".to_string(),
                "Corki".to_string(),
                "Twisted Fate".to_string(),
            ],
        },
    ]
}

pub fn league_meta_comparison() -> LeagueMetaComparison {
    let mut leagues = std::collections::BTreeMap::new();
    leagues.insert(
        "LCK".to_string(),
        LeagueMeta {
            avg_game_time_min: 32.4,
            avg_kills_per_game: 24.1,
            most_picked_champions: vec![
                "Azir".to_string(),
                "K'Sante".to_string(),
                "Ashe".to_string(),
            ],
            unique_meta_description: "Slower, scaling drafts with late-game insurance picks"
                .to_string(),
        },
    );
    leagues.insert(
        "LEC".to_string(),
        LeagueMeta {
            avg_game_time_min: 30.8,
            avg_kills_per_game: 27.5,
            most_picked_champions: vec![
                "Aurora".to_string(),
                "Rumble".to_string(),
                "Kalista".to_string(),
            ],
            unique_meta_description: "Skirmish-heavy early games built on flex picks".to_string(),
        },
    );
    leagues.insert(
        "LPL".to_string(),
        LeagueMeta {
            avg_game_time_min: 29.6,
            avg_kills_per_game: 31.2,
            most_picked_champions: vec![
                "Yone".to_string(),
                "Vi".to_string(),
                "Lucian".to_string(),
            ],
            unique_meta_description: "Aggressive lane phases and fast objective trades".to_string(),
        },
    );
    LeagueMetaComparison(leagues)
}

pub fn patch_evolution(patch: &str) -> PatchEvolution {
    PatchEvolution {
        patch_number: patch.to_string(),
        weeks: vec![
            PatchWeek {
                week_start_date: "2025-06-02".to_string(),
                emerging_champions: vec![EmergingChampion {
                    champion_name: "Aurora".to_string(),
                    win_rate_change: "+3.8%".to_string(),
                    pick_rate_change: "+9.4%".to_string(),
                }],
                declining_champions: vec![DecliningChampion {
                    champion_name: "Corki".to_string(),
                    win_rate_trend: "-2.9%".to_string(),
                    pick_rate_trend: "-6.2%".to_string(),
                }],
                stable_champions: vec![StableChampion {
                    champion_name: "Azir".to_string(),
                    win_rate: 52.4,
                    pick_rate: 24.6,
                }],
            },
            PatchWeek {
                week_start_date: "2025-06-09".to_string(),
                emerging_champions: vec![EmergingChampion {
                    champion_name: "Ambessa".to_string(),
                    win_rate_change: "+2.6%".to_string(),
                    pick_rate_change: "+4.1%".to_string(),
                }],
                declining_champions: vec![DecliningChampion {
                    champion_name: "Rumble".to_string(),
                    win_rate_trend: "-1.8%".to_string(),
                    pick_rate_trend: "-3.5%".to_string(),
                }],
                stable_champions: vec![StableChampion {
                    champion_name: "Azir".to_string(),
                    win_rate: 52.1,
                    pick_rate: 25.0,
                }],
            },
        ],
    }
}

pub fn historical_performance(champion_name: &str) -> ChampionHistoricalPerformance {
    ChampionHistoricalPerformance {
        champion_name: champion_name.to_string(),
        season_data: vec![
            SeasonRecord {
                season: "2024".to_string(),
                split: "Spring".to_string(),
                pick_rate: 12.4,
                win_rate: 49.8,
                notes: "Niche counterpick".to_string(),
            },
            SeasonRecord {
                season: "2024".to_string(),
                split: "Summer".to_string(),
                pick_rate: 18.9,
                win_rate: 51.2,
                notes: "Buffs brought it back into core pools".to_string(),
            },
            SeasonRecord {
                season: "2025".to_string(),
                split: "Spring".to_string(),
                pick_rate: 24.6,
                win_rate: 52.7,
                notes: "Priority flex in the first rotation".to_string(),
            },
        ],
        prediction: "Expected to stay first-pick material while the current patch lasts"
            .to_string(),
    }
}

pub fn match_prediction(team1_id: String, team2_id: String) -> MatchPrediction {
    MatchPrediction {
        team1_id,
        team2_id,
        team1_win_probability: 0.58,
        most_likely_score: "2-1".to_string(),
        confidence: "medium".to_string(),
        key_factors: vec![
            "Better early-game objective control".to_string(),
            "Deeper champion pools in the solo lanes".to_string(),
            "Head-to-head record this split".to_string(),
        ],
    }
}

pub fn champion_recommendation(situation: RecommendationSituation) -> ChampionRecommendation {
    ChampionRecommendation {
        situation,
        recommendations: vec![
            ChampionPick {
                champion_name: "Azir".to_string(),
                tier: "S".to_string(),
                win_rate_vs_comp_type: 54.2,
                reasons: vec![
                    "Outranges the enemy mid laner".to_string(),
                    "Safe blind pick into most compositions".to_string(),
                ],
            },
            ChampionPick {
                champion_name: "Orianna".to_string(),
                tier: "A".to_string(),
                win_rate_vs_comp_type: 52.6,
                reasons: vec!["Pairs with any engage jungler".to_string()],
            },
        ],
        avoid_champions: vec![AvoidChampion {
            champion_name: "Yone".to_string(),
            reason: "Falls behind into ranged mid matchups".to_string(),
        }],
    }
}

pub fn meta_shift_alert() -> MetaShiftAlert {
    MetaShiftAlert {
        timestamp: Utc::now().to_rfc3339(),
        rising_threats: vec![
            ChampionTrend {
                champion_name: "Aurora".to_string(),
                role: "mid".to_string(),
                win_rate_trend: "+4.2% over two weeks".to_string(),
                pick_rate_trend: "+6.8% over two weeks".to_string(),
            },
            ChampionTrend {
                champion_name: "Ambessa".to_string(),
                role: "top".to_string(),
                win_rate_trend: "+3.1% over two weeks".to_string(),
                pick_rate_trend: "+5.2% over two weeks".to_string(),
            },
        ],
        declining_picks: vec![ChampionTrend {
            champion_name: "Corki".to_string(),
            role: "mid".to_string(),
            win_rate_trend: "-3.5% over two weeks".to_string(),
            pick_rate_trend: "-7.1% over two weeks".to_string(),
        }],
        immediate_actions: vec![
            "Add Aurora to the ban rotation".to_string(),
            "Prepare answers for Ambessa top".to_string(),
        ],
    }
}

pub fn player_performance_alert() -> PlayerPerformanceAlert {
    PlayerPerformanceAlert {
        timestamp: Utc::now().to_rfc3339(),
        hot_streaks: vec![PlayerNote {
            player_name: "Faker".to_string(),
            team_name: "T1".to_string(),
            description: "7-game win streak with a 6.1 KDA".to_string(),
        }],
        concerning_trends: vec![PlayerNote {
            player_name: "Knight".to_string(),
            team_name: "BLG".to_string(),
            description: "Damage share down 4% across the last five games".to_string(),
        }],
        injury_alerts: vec![PlayerNote {
            player_name: "Zeus".to_string(),
            team_name: "T1".to_string(),
            description: "Wrist soreness, questionable for week 6".to_string(),
        }],
    }
}
