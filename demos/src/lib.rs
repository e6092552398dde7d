//! Shared editor model for the terminal demo.
//!
//! The [`Editor`] owns the grid and plays the part of the interactive
//! front-end: it edits walls and markers, runs a search on demand and keeps
//! the replay [`Player`] that the terminal layer draws from.

pub mod term;

use std::time::Duration;

use pathviz_core::{Grid, GridConfig, MarkerKind, Point};
use pathviz_paths::search_grid;
use pathviz_replay::{Mark, Player, ReplayPolicy, Timeline};
use rand::SeedableRng;
use rand::rngs::StdRng;

pub const DEFAULT_DENSITY: f64 = 0.25;

/// Largest accepted `--rows`/`--cols`; the grid and two status lines must
/// fit terminal coordinates.
pub const MAX_SIZE: i32 = 4096;

pub const USAGE: &str = "\
usage: pathviz [--rows N] [--cols N] [--seed N] [--density F]

keys:  arrows/hjkl move   space wall   s/f place start/finish
       enter run   r random walls   c clear   +/- speed   p pause   q quit
mouse: click or drag to paint walls, drag S/F to move them";

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Command-line options.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub config: GridConfig,
    pub seed: Option<u64>,
    pub density: f64,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            config: GridConfig::default(),
            seed: None,
            density: DEFAULT_DENSITY,
        }
    }
}

impl Options {
    /// Parse flags (without the program name).
    pub fn parse<I: IntoIterator<Item = String>>(
        args: I,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let mut opts = Self::default();
        let mut rows = opts.config.rows;
        let mut cols = opts.config.cols;
        let mut args = args.into_iter();
        while let Some(flag) = args.next() {
            let mut value = || args.next().ok_or_else(|| format!("{flag} needs a value"));
            match flag.as_str() {
                "--rows" => rows = value()?.parse()?,
                "--cols" => cols = value()?.parse()?,
                "--seed" => opts.seed = Some(value()?.parse()?),
                "--density" => opts.density = value()?.parse()?,
                _ => return Err(format!("unknown argument {flag}\n{USAGE}").into()),
            }
        }
        for (name, n) in [("rows", rows), ("cols", cols)] {
            if !(1..=MAX_SIZE).contains(&n) {
                return Err(format!("--{name} must be between 1 and {MAX_SIZE}").into());
            }
        }
        if (rows, cols) != (opts.config.rows, opts.config.cols) {
            opts.config = GridConfig::with_size(rows, cols);
        }
        Ok(opts)
    }
}

// ---------------------------------------------------------------------------
// Actions
// ---------------------------------------------------------------------------

/// Input the editor understands, already decoded from terminal events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Move { drow: i32, dcol: i32 },
    ToggleWall,
    PlaceMarker(MarkerKind),
    Scatter,
    Clear,
    Run,
    Faster,
    Slower,
    Pause,
    Quit,
    /// Mouse button pressed over a grid cell.
    Press(Point),
    /// Mouse dragged over a grid cell.
    Drag(Point),
    Release,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Drag {
    Marker(MarkerKind),
    Paint(bool),
}

// ---------------------------------------------------------------------------
// Editor
// ---------------------------------------------------------------------------

/// What a single grid cell should look like on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Start,
    Finish,
    Wall,
    Visited,
    Path,
    Free,
}

pub struct Editor {
    grid: Grid,
    cursor: Point,
    player: Option<Player>,
    policy: ReplayPolicy,
    rng: StdRng,
    density: f64,
    drag: Option<Drag>,
    status: String,
    quit: bool,
}

impl Editor {
    pub fn new(opts: &Options) -> Result<Self, Box<dyn std::error::Error>> {
        let grid = Grid::from_config(&opts.config)?;
        let rng = match opts.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(Self {
            cursor: grid.start(),
            grid,
            player: None,
            policy: ReplayPolicy::default(),
            rng,
            density: opts.density,
            drag: None,
            status: String::from("press enter to search, q to quit"),
            quit: false,
        })
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn cursor(&self) -> Point {
        self.cursor
    }

    #[inline]
    pub fn player(&self) -> Option<&Player> {
        self.player.as_ref()
    }

    #[inline]
    pub fn status(&self) -> &str {
        &self.status
    }

    #[inline]
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Whether a replay still has events to show.
    pub fn is_animating(&self) -> bool {
        self.player
            .as_ref()
            .is_some_and(|p| !p.is_done() && !p.is_paused())
    }

    /// How long the front-end may wait for input before the next replay
    /// event is due.
    pub fn poll_timeout(&self) -> Duration {
        const IDLE: Duration = Duration::from_millis(250);
        match &self.player {
            Some(p) if !p.is_paused() => p.time_to_next().map_or(IDLE, |d| d.min(IDLE)),
            _ => IDLE,
        }
    }

    /// Feed elapsed wall-clock time to the replay. Returns whether anything
    /// changed on screen.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let Some(player) = self.player.as_mut() else {
            return false;
        };
        let changed = !player.advance(dt).is_empty();
        if changed && player.is_done() {
            self.status = if player.timeline().path_found() {
                format!(
                    "path of {} cells, {} cells explored",
                    player.timeline().path_events().len(),
                    player.timeline().visits()
                )
            } else {
                format!(
                    "no path: finish unreachable ({} cells explored)",
                    player.timeline().visits()
                )
            };
        }
        changed
    }

    /// How the cell at `p` should be drawn.
    pub fn tile(&self, p: Point) -> Tile {
        if p == self.grid.start() {
            return Tile::Start;
        }
        if p == self.grid.finish() {
            return Tile::Finish;
        }
        if self.grid.is_wall(p) {
            return Tile::Wall;
        }
        match self.player.as_ref().map(|pl| pl.overlay().get(p)) {
            Some(Mark::Path) => Tile::Path,
            Some(Mark::Visited) => Tile::Visited,
            _ => Tile::Free,
        }
    }

    pub fn update(&mut self, action: Action) {
        match action {
            Action::Move { drow, dcol } => {
                let next = self.cursor.shift(drow, dcol);
                if self.grid.contains(next) {
                    self.cursor = next;
                }
            }
            Action::ToggleWall => {
                let p = self.cursor;
                self.edit(|g| g.toggle_wall(p).map(drop));
            }
            Action::PlaceMarker(kind) => {
                let p = self.cursor;
                self.edit(|g| g.relocate_marker(kind, p));
            }
            Action::Scatter => {
                self.grid.reset();
                let placed = self.grid.scatter_walls(&mut self.rng, self.density);
                self.player = None;
                self.status = format!("placed {placed} random walls");
            }
            Action::Clear => {
                self.grid.reset();
                self.player = None;
                self.status = String::from("grid cleared");
            }
            Action::Run => self.run(),
            Action::Faster => {
                if let Some(p) = self.player.as_mut() {
                    p.speed_up();
                    self.status = format!("speed x{}", p.speed());
                }
            }
            Action::Slower => {
                if let Some(p) = self.player.as_mut() {
                    p.slow_down();
                    self.status = format!("speed x{}", p.speed());
                }
            }
            Action::Pause => {
                if let Some(p) = self.player.as_mut() {
                    p.toggle_pause();
                }
            }
            Action::Quit => self.quit = true,
            Action::Press(p) => self.press(p),
            Action::Drag(p) => self.drag_to(p),
            Action::Release => self.drag = None,
        }
    }

    fn run(&mut self) {
        let search = search_grid(&self.grid);
        let path = search.path();
        log::info!(
            "search settled {} cells, path found: {}",
            search.order().len(),
            path.is_found()
        );
        let timeline = Timeline::new(&search, &path, &self.policy);
        self.player = Some(Player::new(timeline));
        self.status = String::from("searching...");
    }

    fn press(&mut self, p: Point) {
        if !self.grid.contains(p) {
            return;
        }
        self.cursor = p;
        if p == self.grid.start() {
            self.drag = Some(Drag::Marker(MarkerKind::Start));
        } else if p == self.grid.finish() {
            self.drag = Some(Drag::Marker(MarkerKind::Finish));
        } else {
            let wall = !self.grid.is_wall(p);
            self.drag = Some(Drag::Paint(wall));
            self.edit(|g| g.set_wall(p, wall).map(drop));
        }
    }

    fn drag_to(&mut self, p: Point) {
        if !self.grid.contains(p) {
            return;
        }
        self.cursor = p;
        let drag = self.drag;
        match drag {
            // A dragged marker passes over walls without clearing them.
            Some(Drag::Marker(kind)) if !self.grid.is_wall(p) => {
                self.edit(|g| g.relocate_marker(kind, p));
            }
            // Painting skips markers silently.
            Some(Drag::Paint(wall)) if p != self.grid.start() && p != self.grid.finish() => {
                self.edit(|g| g.set_wall(p, wall).map(drop));
            }
            _ => {}
        }
    }

    /// Apply a grid edit; any replay is discarded because it no longer
    /// matches the grid.
    fn edit(&mut self, f: impl FnOnce(&mut Grid) -> Result<(), pathviz_core::GridError>) {
        match f(&mut self.grid) {
            Ok(()) => {
                self.player = None;
            }
            Err(e) => self.status = e.to_string(),
        }
    }
}
