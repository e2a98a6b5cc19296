use std::path::Path;
use std::sync::{Arc, Mutex};

use kana_core::corpus::Corpus;
use kana_session::{KeyEvent, TrainerSession};

use super::types::{convert_to_events, KanaEvent, KanaMode, KanaView, KanaWord};
use super::{KanaError, KanaKeyResponse};

/// A validated word list shared by any number of sessions.
#[derive(uniffi::Object)]
pub struct KanaCorpus {
    pub(crate) inner: Arc<Corpus>,
}

#[uniffi::export]
impl KanaCorpus {
    #[uniffi::constructor]
    pub fn open(path: String) -> Result<Arc<Self>, KanaError> {
        let corpus = Corpus::open(Path::new(&path))?;
        Ok(Self::wrap(corpus))
    }

    #[uniffi::constructor]
    pub fn from_json(json: String) -> Result<Arc<Self>, KanaError> {
        Ok(Self::wrap(Corpus::from_json(&json)?))
    }

    #[uniffi::constructor]
    pub fn builtin() -> Arc<Self> {
        Self::wrap(Corpus::builtin())
    }

    /// The corpus named in settings, or the builtin one.
    #[uniffi::constructor]
    pub fn configured() -> Result<Arc<Self>, KanaError> {
        Ok(Self::wrap(Corpus::configured()?))
    }

    pub fn len(&self) -> u32 {
        u32::try_from(self.inner.len()).unwrap_or(u32::MAX)
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn words(&self) -> Vec<KanaWord> {
        self.inner
            .words()
            .iter()
            .map(|w| KanaWord {
                display: w.display.clone(),
                reading: w.reading.clone(),
            })
            .collect()
    }
}

impl KanaCorpus {
    fn wrap(corpus: Corpus) -> Arc<Self> {
        Arc::new(Self {
            inner: Arc::new(corpus),
        })
    }
}

/// One trainer session. All time arguments are host-supplied monotonic
/// milliseconds.
#[derive(uniffi::Object)]
pub struct KanaSession {
    session: Mutex<TrainerSession>,
}

#[uniffi::export]
impl KanaSession {
    #[uniffi::constructor]
    pub fn new(corpus: Arc<KanaCorpus>, seed: Option<u64>) -> Arc<Self> {
        let corpus = Arc::clone(&corpus.inner);
        let session = match seed {
            Some(seed) => TrainerSession::seeded(corpus, seed),
            None => TrainerSession::new(corpus),
        };
        Arc::new(Self {
            session: Mutex::new(session),
        })
    }

    /// `text` is what the key produced: a single character, " ", "\t", "\r".
    pub fn handle_key(&self, text: String, now_ms: u64) -> KanaKeyResponse {
        let resp = self
            .session
            .lock()
            .unwrap()
            .handle_key(KeyEvent::text(&text), now_ms);
        convert_to_events(resp)
    }

    pub fn tick(&self, now_ms: u64) -> Vec<KanaEvent> {
        self.session
            .lock()
            .unwrap()
            .tick(now_ms)
            .into_iter()
            .map(Into::into)
            .collect()
    }

    pub fn view(&self, now_ms: u64) -> KanaView {
        self.session.lock().unwrap().view(now_ms).into()
    }

    pub fn mode(&self) -> KanaMode {
        self.session.lock().unwrap().mode().into()
    }

    /// Returns false outside the start screen.
    pub fn set_mode(&self, mode: KanaMode) -> bool {
        self.session.lock().unwrap().set_mode(mode.into())
    }
}
