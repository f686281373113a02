use log::debug;

use super::{
    com::{Session, Suspension},
    inst::InstructionSet,
    Error,
};

/// Sessions connected in a ring, each one's output is the next one's input.
///
/// The signal enters the first session; a round ends when the last session
/// outputs, and its output re-enters the first session in the next round.
pub struct Chain<'a> {
    sessions: Vec<Session<'a>>,
    signal: i64,
    round: usize,
    finished: bool,
}

impl<'a> Chain<'a> {
    /// One session per setting, each gets its setting as first input.
    pub fn new(
        image: &[i64],
        settings: &[i64],
        inst_set: &'a InstructionSet,
        init_signal: i64,
    ) -> Self {
        let sessions = settings
            .iter()
            .map(|&setting| Session::new(image, &[setting], inst_set))
            .collect();
        Self::from_sessions(sessions, init_signal)
    }

    pub fn from_sessions(sessions: Vec<Session<'a>>, init_signal: i64) -> Self {
        Self {
            sessions,
            signal: init_signal,
            round: 0,
            finished: false,
        }
    }

    /// Passes the signal through every session once.
    ///
    /// Returns `None` as soon as any session halts instead of producing output.
    pub fn next_signal(&mut self) -> Result<Option<i64>, Error> {
        if self.finished {
            return Ok(None);
        }

        for (ind, session) in self.sessions.iter_mut().enumerate() {
            session.provide(self.signal)?;
            match session.resume()? {
                Suspension::Output(value) => self.signal = value,
                Suspension::Halt => {
                    debug!(
                        "session #{} halted in round {}, last signal {}",
                        ind, self.round, self.signal
                    );
                    self.finished = true;
                    return Ok(None);
                }
                Suspension::Input => return Err(Error::ChainStalled(ind)),
            }
        }

        self.round += 1;
        Ok(Some(self.signal))
    }

    pub fn first_signal(&mut self) -> Result<Option<i64>, Error> {
        self.next_signal()
    }

    /// Runs rounds until a session halts, returns the last complete round's signal.
    pub fn last_signal(&mut self) -> Result<Option<i64>, Error> {
        let mut last = None;
        while let Some(signal) = self.next_signal()? {
            last = Some(signal);
        }

        Ok(last)
    }
}
