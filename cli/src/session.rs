use mineboard_core::*;
use rand::{SeedableRng, rngs::SmallRng};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SessionState {
    Playing,
    Won,
    Lost,
}

impl SessionState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// One player's run of games on a fixed configuration. Input is frozen once a game ends
/// until a new one is dealt.
#[derive(Debug)]
pub struct Session {
    board: Board,
    state: SessionState,
    config: BoardConfig,
    cascade: Cascade,
    rng: SmallRng,
}

impl Session {
    pub fn new(config: BoardConfig, cascade: Cascade, seed: u64) -> Result<Self> {
        let mut rng = SmallRng::seed_from_u64(seed);
        let board = create_board(config.size, config.mines, &mut rng)?.with_cascade(cascade);
        Ok(Self::with_board(board, rng))
    }

    /// Starts from a prepared board instead of dealing one. Later games reuse its
    /// configuration and cascade rule.
    pub fn with_board(board: Board, rng: SmallRng) -> Self {
        Self {
            config: board.config(),
            cascade: board.cascade(),
            board,
            state: SessionState::Playing,
            rng,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn new_game(&mut self) -> Result<()> {
        self.board = create_board(self.config.size, self.config.mines, &mut self.rng)?
            .with_cascade(self.cascade);
        self.state = SessionState::Playing;
        log::info!("New game dealt");
        Ok(())
    }

    pub fn open(&mut self, coords: Coord2) -> Result<OpenOutcome> {
        if self.state.is_finished() {
            log::debug!("Game over, ignoring open at {:?}", coords);
            return Ok(OpenOutcome::NoChange);
        }

        let outcome = self.board.open(coords)?;
        match outcome {
            OpenOutcome::HitMine => self.finish(SessionState::Lost),
            OpenOutcome::Won => self.finish(SessionState::Won),
            OpenOutcome::Opened | OpenOutcome::NoChange => {}
        }
        Ok(outcome)
    }

    pub fn toggle_mark(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        if self.state.is_finished() {
            log::debug!("Game over, ignoring mark at {:?}", coords);
            return Ok(MarkOutcome::NoChange);
        }
        self.board.toggle_mark(coords)
    }

    fn finish(&mut self, state: SessionState) {
        log::info!("Game finished: {:?}", state);
        self.state = state;
        self.board.open_all();
    }
}
