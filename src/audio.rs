use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

use crate::core::level;
use crate::core::{LevelSample, RenderState};
use crate::frame::RenderTask;

/// The one shared audio-level source for the page.
///
/// Starts idle; `start_microphone` acquires the capture and spawns a
/// sampling loop that publishes one `LevelSample` per animation frame.
/// Renderers poll `latest()`, the status line subscribes. The captured
/// stream and context are held for the life of the page; there is no
/// release path for them.
pub struct LevelFeed {
    analyser: RefCell<Option<web::AnalyserNode>>,
    bins: RefCell<Vec<u8>>,
    latest: Cell<LevelSample>,
    listeners: RefCell<Vec<Box<dyn Fn(LevelSample)>>>,
    sampler: RefCell<Option<RenderTask>>,
    stream: RefCell<Option<web::MediaStream>>,
    context: RefCell<Option<web::AudioContext>>,
}

impl LevelFeed {
    pub fn new() -> Rc<LevelFeed> {
        Rc::new(LevelFeed {
            analyser: RefCell::new(None),
            bins: RefCell::new(Vec::new()),
            latest: Cell::new(LevelSample::IDLE),
            listeners: RefCell::new(Vec::new()),
            sampler: RefCell::new(None),
            stream: RefCell::new(None),
            context: RefCell::new(None),
        })
    }

    pub fn latest(&self) -> LevelSample {
        self.latest.get()
    }

    pub fn is_live(&self) -> bool {
        self.analyser.borrow().is_some()
    }

    /// Register a callback invoked with every published sample.
    pub fn subscribe(&self, f: impl Fn(LevelSample) + 'static) {
        self.listeners.borrow_mut().push(Box::new(f));
    }

    /// Poll the analyser once and publish the result. No-op while idle.
    pub fn sample_once(&self) {
        let analyser = self.analyser.borrow();
        let sample = if let Some(a) = analyser.as_ref() {
            let mut bins = self.bins.borrow_mut();
            a.get_byte_frequency_data(&mut bins);
            level::sample_from_bins(&bins)
        } else {
            return;
        };
        drop(analyser);
        self.latest.set(sample);
        self.notify(sample);
    }

    fn notify(&self, sample: LevelSample) {
        for listener in self.listeners.borrow().iter() {
            listener(sample);
        }
    }
}

/// Request microphone access and, on grant, wire stream -> analyser and
/// start the per-frame sampling task. Safe to call again after a
/// denial; a second call while live is a no-op.
pub async fn start_microphone(feed: Rc<LevelFeed>) -> anyhow::Result<()> {
    if feed.is_live() {
        return Ok(());
    }
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let devices = window
        .navigator()
        .media_devices()
        .map_err(|e| anyhow::anyhow!("media devices unavailable: {:?}", e))?;
    let constraints = web::MediaStreamConstraints::new();
    constraints.set_audio(&JsValue::TRUE);
    let request = devices
        .get_user_media_with_constraints(&constraints)
        .map_err(|e| anyhow::anyhow!("getUserMedia rejected: {:?}", e))?;
    let stream: web::MediaStream = JsFuture::from(request)
        .await
        .map_err(|e| anyhow::anyhow!("microphone access denied: {:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("unexpected getUserMedia result: {:?}", e))?;

    let audio_ctx = web::AudioContext::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    _ = audio_ctx.resume();
    let source = audio_ctx
        .create_media_stream_source(&stream)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let analyser = match create_analyser(&audio_ctx) {
        Ok(a) => a,
        Err(()) => return Err(anyhow::anyhow!("AnalyserNode unavailable")),
    };
    _ = source.connect_with_audio_node(&analyser);

    let bin_count = analyser.frequency_bin_count() as usize;
    feed.bins.borrow_mut().resize(bin_count, 0);
    *feed.analyser.borrow_mut() = Some(analyser);
    *feed.stream.borrow_mut() = Some(stream);
    *feed.context.borrow_mut() = Some(audio_ctx);

    // Granted but not yet sampled: report silence in the listening state.
    feed.latest.set(LevelSample {
        level: 0.0,
        state: RenderState::Listening,
    });
    feed.notify(feed.latest());

    let sampling = feed.clone();
    *feed.sampler.borrow_mut() = Some(RenderTask::spawn(move || sampling.sample_once()));
    log::info!("microphone live, {} frequency bins", bin_count);
    Ok(())
}

fn create_analyser(audio_ctx: &web::AudioContext) -> Result<web::AnalyserNode, ()> {
    match web::AnalyserNode::new(audio_ctx) {
        Ok(a) => {
            a.set_fft_size(level::FFT_SIZE);
            Ok(a)
        }
        Err(e) => {
            log::error!("AnalyserNode error: {:?}", e);
            Err(())
        }
    }
}
