use std::sync::Arc;
use actix_web::HttpResponse;
use actix_web::http::header::ContentType;
use actix_web::web::Data;
use chrono::{TimeZone, Utc};
use crate::api::structs::api_service_data::ApiServiceData;
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::structs::game_stats::GameStats;

const DASHBOARD_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{service_name}</title>
    <style>
        body {
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            margin: 0;
            padding: 20px;
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            min-height: 100vh;
        }
        .container {
            max-width: 1200px;
            margin: 0 auto;
            background: white;
            border-radius: 15px;
            box-shadow: 0 10px 30px rgba(0,0,0,0.2);
            overflow: hidden;
        }
        .header {
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            color: white;
            padding: 30px;
            text-align: center;
        }
        .header h1 {
            margin: 0;
            font-size: 2.5em;
            font-weight: 300;
        }
        .stats-grid {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
            gap: 20px;
            padding: 30px;
        }
        .stat-card {
            background: #f8f9fa;
            border-radius: 10px;
            padding: 20px;
            border-left: 4px solid #667eea;
        }
        .stat-card h3 {
            margin: 0 0 15px 0;
            color: #333;
        }
        .stat-number {
            font-size: 2em;
            font-weight: bold;
            color: #667eea;
        }
        .games-list {
            padding: 30px;
        }
        .game-item {
            display: flex;
            justify-content: space-between;
            align-items: center;
            padding: 15px;
            margin: 10px 0;
            background: #f8f9fa;
            border-radius: 8px;
            border-left: 4px solid #667eea;
        }
        .game-info {
            flex: 1;
        }
        .game-name {
            font-weight: bold;
            color: #333;
        }
        .game-id {
            color: #666;
            font-size: 0.9em;
        }
        .game-dates {
            color: #666;
            font-size: 0.8em;
        }
        .download-count {
            background: #667eea;
            color: white;
            padding: 5px 15px;
            border-radius: 20px;
            font-weight: bold;
        }
        .refresh-btn {
            background: #667eea;
            color: white;
            border: none;
            padding: 10px 20px;
            border-radius: 5px;
            cursor: pointer;
            font-size: 1em;
            margin: 20px;
        }
        .refresh-btn:hover {
            background: #5a6fd8;
        }
    </style>
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>🎮 {service_name}</h1>
            <p>Track downloads and popularity of graphics mods</p>
        </div>

        <div class="stats-grid">
            <div class="stat-card">
                <h3>Total Games</h3>
                <div class="stat-number">{total_games}</div>
            </div>
            <div class="stat-card">
                <h3>Total Downloads</h3>
                <div class="stat-number">{total_downloads}</div>
            </div>
            <div class="stat-card">
                <h3>Most Popular</h3>
                <div class="stat-number">{top_game}</div>
            </div>
        </div>

        <button class="refresh-btn" onclick="location.reload()">🔄 Refresh Statistics</button>

        <div class="games-list">
            <h2>📊 Download Statistics by Game</h2>
            {game_rows}
        </div>
    </div>
</body>
</html>
"#;

const GAME_ROW_TEMPLATE: &str = r#"<div class="game-item">
    <div class="game-info">
        <div class="game-name">{game_name}</div>
        <div class="game-id">{game_id}</div>
        <div class="game-dates">First: {first_download} | Last: {last_download}</div>
    </div>
    <div class="download-count">{total_downloads} downloads</div>
</div>"#;

fn html_escape(input: &str) -> String {
    input.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn format_timestamp(timestamp: i64) -> String {
    match Utc.timestamp_opt(timestamp, 0).single() {
        None => String::from("-"),
        Some(datetime) => datetime.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

#[tracing::instrument(level = "debug", skip(data))]
pub async fn dashboard_get(data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    data.tracker.update_stats(StatsEvent::ApiHandled, 1);

    let (global, games) = data.tracker.get_all_with_global();
    let mut ranked: Vec<GameStats> = games.into_values().collect();
    ranked.sort_by(GameStats::rank_order);

    let top_game = ranked.first()
        .map(|entry| html_escape(&entry.game_name))
        .unwrap_or_else(|| String::from("-"));

    let game_rows = if ranked.is_empty() {
        String::from("<p>📭 No downloads recorded yet</p>")
    } else {
        ranked.iter().map(|entry| {
            GAME_ROW_TEMPLATE
                .replace("{game_name}", &html_escape(&entry.game_name))
                .replace("{game_id}", &html_escape(&entry.game_id))
                .replace("{first_download}", &format_timestamp(entry.first_download))
                .replace("{last_download}", &format_timestamp(entry.last_download))
                .replace("{total_downloads}", &entry.total_downloads.to_string())
        }).collect::<Vec<String>>().join("\n")
    };

    let body = DASHBOARD_TEMPLATE
        .replace("{service_name}", &html_escape(&data.tracker.config.tracker_config.service_name))
        .replace("{total_games}", &global.total_games.to_string())
        .replace("{total_downloads}", &global.total_downloads.to_string())
        .replace("{top_game}", &top_game)
        .replace("{game_rows}", &game_rows);

    HttpResponse::Ok().content_type(ContentType::html()).body(body)
}
