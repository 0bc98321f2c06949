use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;

use crate::game::{grid::GRID_SIZE, BoardLayout};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub game: GameConfig,
    pub layout: LayoutConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub frontend_dir: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GameConfig {
    pub lexicon_path: String,
}

/// Pixel geometry of the board the client draws
#[derive(Debug, Clone, Deserialize)]
pub struct LayoutConfig {
    pub origin_x: f64,
    pub origin_y: f64,
    pub cell_size: f64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let server = ServerConfig {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("PORT must be a number")?,
            frontend_dir: env::var("FRONTEND_DIR").unwrap_or_else(|_| "../frontend".to_string()),
        };

        let game = GameConfig {
            lexicon_path: env::var("LEXICON_PATH")
                .unwrap_or_else(|_| "./bogwords.txt".to_string()),
        };

        let layout = LayoutConfig {
            origin_x: env::var("BOARD_ORIGIN_X")
                .unwrap_or_else(|_| "50".to_string())
                .parse()
                .context("BOARD_ORIGIN_X must be a number")?,
            origin_y: env::var("BOARD_ORIGIN_Y")
                .unwrap_or_else(|_| "50".to_string())
                .parse()
                .context("BOARD_ORIGIN_Y must be a number")?,
            cell_size: env::var("BOARD_CELL_SIZE")
                .unwrap_or_else(|_| "75".to_string())
                .parse()
                .context("BOARD_CELL_SIZE must be a number")?,
        };

        if layout.cell_size <= 0.0 {
            anyhow::bail!("BOARD_CELL_SIZE must be positive");
        }

        Ok(Config {
            server,
            game,
            layout,
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn board_layout(&self) -> BoardLayout {
        BoardLayout::new(
            self.layout.origin_x,
            self.layout.origin_y,
            self.layout.cell_size,
            GRID_SIZE,
            GRID_SIZE,
        )
    }
}
