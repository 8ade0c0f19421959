//! Route table
//!
//! Paths of the web build and the screen names the native tab navigator
//! uses for the same destinations. Navigation itself belongs to the host.

use serde::Serialize;

/// Screen destinations
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Route {
    Home,
    Swap,
    Liquidity,
    RemoveLiquidity,
    Migrate,
    Farming,
    /// Harvest screen, optionally opened on one farm's token
    Harvest { token: Option<String> },
    Staking,
    Unstake,
}

impl Route {
    /// Resolve a path. Unknown paths redirect to Home.
    pub fn parse(path: &str) -> Route {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        // Prefix matches, first arm wins
        match segments.as_slice() {
            [] => Route::Home,
            ["swap", ..] => Route::Swap,
            ["liquidity", "migrate", ..] => Route::Migrate,
            ["liquidity", "remove", ..] => Route::RemoveLiquidity,
            ["liquidity", ..] => Route::Liquidity,
            ["farming", "harvest", rest @ ..] => Route::Harvest {
                token: rest.first().map(|s| s.to_string()),
            },
            ["farming", ..] => Route::Farming,
            ["migrate", ..] => Route::Migrate,
            ["staking", "unstake", ..] => Route::Unstake,
            ["staking", ..] => Route::Staking,
            _ => {
                tracing::debug!("Unknown path {}, redirecting home", path);
                Route::Home
            }
        }
    }

    /// Canonical path of the route
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Swap => "/swap".to_string(),
            Route::Liquidity => "/liquidity".to_string(),
            Route::RemoveLiquidity => "/liquidity/remove".to_string(),
            Route::Migrate => "/migrate".to_string(),
            Route::Farming => "/farming".to_string(),
            Route::Harvest { token: None } => "/farming/harvest".to_string(),
            Route::Harvest { token: Some(token) } => format!("/farming/harvest/{}", token),
            Route::Staking => "/staking".to_string(),
            Route::Unstake => "/staking/unstake".to_string(),
        }
    }

    /// Screen name used by the native navigator
    pub fn screen_name(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Swap => "Swap",
            Route::Liquidity => "Liquidity",
            Route::RemoveLiquidity => "RemoveLiquidity",
            Route::Migrate => "Migrate",
            Route::Farming => "Farming",
            Route::Harvest { .. } => "Harvest",
            Route::Staking => "Staking",
            Route::Unstake => "Unstake",
        }
    }
}

/// Host navigation, fire-and-forget.
///
/// Implemented by the host's router. Views only carry the target
/// [`Route`] (see `FarmView::link` and the portfolio sections' `manage`);
/// the host passes it here when the user follows the link.
pub trait Navigator {
    fn navigate(&self, route: Route);
}
