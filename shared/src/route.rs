/// The two screens reachable from the side menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Teachers,
    Positions,
}

impl Route {
    /// Menu order
    pub const ALL: [Route; 2] = [Route::Teachers, Route::Positions];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Teachers => "/",
            Route::Positions => "/vi-tri",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Route::Teachers => "Danh sách giáo viên",
            Route::Positions => "Danh sách vị trí công tác",
        }
    }

    /// Match one of the two literal paths; a trailing slash is tolerated
    pub fn from_path(path: &str) -> Option<Route> {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Some(Route::Teachers),
            "/vi-tri" => Some(Route::Positions),
            _ => None,
        }
    }
}
