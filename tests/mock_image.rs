#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::mpsc::{UnboundedSender, unbounded_channel};
use tokio::time::timeout;
use toaster::ToastBuilder;
use toaster::assets::{ImageLoader, ImageSource, SoundPlayer};
use toaster::error::AssetError;
use toaster::geometry::Size;
use toaster::platform::{HeadlessSurface, SurfaceEvent, SurfaceJournal};
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n";

struct TimedPlayer {
    played_at: UnboundedSender<Instant>,
}

impl SoundPlayer for TimedPlayer {
    fn play(&self, _clip: &Path) -> Result<(), AssetError> {
        let _ = self.played_at.send(Instant::now());
        Ok(())
    }
}

fn quick_toast(image: &str) -> ToastBuilder {
    ToastBuilder::new()
        .image_source(image)
        .animation_duration(Duration::from_millis(20))
        .frame_interval(Duration::from_millis(5))
        .open_time(Duration::from_millis(10))
        .image_loader(ImageLoader::new(Duration::from_secs(2)).expect("loader"))
}

fn icon_filled(journal: &SurfaceJournal) -> Option<bool> {
    journal
        .events()
        .into_iter()
        .find_map(|event| match event {
            SurfaceEvent::Shown { icon_filled, .. } => Some(icon_filled),
            _ => None,
        })
        .expect("toast was shown")
}

#[tokio::test]
async fn remote_icon_is_fetched_before_show() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/icon.png"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(PNG_MAGIC))
        .expect(1)
        .mount(&server)
        .await;

    let surface = HeadlessSurface::new(Size::new(1280.0, 720.0));
    let journal = surface.journal();
    let toast = quick_toast(&format!("{}/icon.png", server.uri()))
        .build(surface)
        .expect("toast");

    let outcome = timeout(Duration::from_secs(5), toast.start().finished())
        .await
        .expect("toast finished in time");
    assert!(outcome.is_ok());
    assert_eq!(icon_filled(&journal), Some(true));
}

#[tokio::test]
async fn missing_icon_does_not_stop_the_toast() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing.png"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let surface = HeadlessSurface::new(Size::new(1280.0, 720.0));
    let journal = surface.journal();
    let toast = quick_toast(&format!("{}/missing.png", server.uri()))
        .build(surface)
        .expect("toast");

    let outcome = timeout(Duration::from_secs(5), toast.start().finished())
        .await
        .expect("toast finished in time");
    assert!(outcome.is_ok());
    assert_eq!(icon_filled(&journal), Some(false));
    assert!(matches!(
        journal.events().last(),
        Some(SurfaceEvent::Closed { .. })
    ));
}

#[tokio::test]
async fn loader_reports_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let loader = ImageLoader::new(Duration::from_secs(2)).expect("loader");
    let url = Url::parse(&format!("{}/busy.png", server.uri())).expect("valid mock url");
    let err = loader
        .load(&ImageSource::Remote(url))
        .await
        .expect_err("503 must fail");
    assert!(matches!(err, AssetError::HttpStatus { status } if status.as_u16() == 503));
}

#[tokio::test]
async fn local_icon_is_read_from_disk() {
    let file = std::env::temp_dir().join(format!("toaster-icon-{}.png", std::process::id()));
    std::fs::write(&file, PNG_MAGIC).expect("write icon");

    let loader = ImageLoader::new(Duration::from_secs(2)).expect("loader");
    let bytes = loader
        .load(&ImageSource::Local(file.clone()))
        .await
        .expect("local icon");
    assert_eq!(&bytes[..], PNG_MAGIC);

    let _ = std::fs::remove_file(file);
}

#[tokio::test]
async fn sound_waits_for_a_slow_icon() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow.png"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(PNG_MAGIC)
                .set_delay(Duration::from_millis(300)),
        )
        .mount(&server)
        .await;

    let (tx, mut played_at) = unbounded_channel();
    let created = Instant::now();
    let surface = HeadlessSurface::new(Size::new(1280.0, 720.0));
    let journal = surface.journal();
    let toast = quick_toast(&format!("{}/slow.png", server.uri()))
        .sound_dir(PathBuf::from("/nonexistent"))
        .sound_player(Arc::new(TimedPlayer { played_at: tx }))
        .build(surface)
        .expect("toast");

    let outcome = timeout(Duration::from_secs(5), toast.start().finished())
        .await
        .expect("toast finished in time");
    assert!(outcome.is_ok());

    let sound_at = played_at
        .recv()
        .await
        .expect("sound played")
        .duration_since(created);
    let shown_at = journal
        .events()
        .first()
        .map(SurfaceEvent::at)
        .expect("toast was shown");

    assert_eq!(icon_filled(&journal), Some(true));
    assert!(sound_at >= Duration::from_millis(300), "sound at {sound_at:?}");
    assert!(
        sound_at.abs_diff(shown_at) < Duration::from_millis(200),
        "sound at {sound_at:?}, shown at {shown_at:?}"
    );
}
