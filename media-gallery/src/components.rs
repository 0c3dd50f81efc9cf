//! Dioxus UI components for the media gallery
//!
//! Every component reads the shared `GalleryController` from context, so the
//! app has to provide one with `use_context_provider` before rendering them.
//! Components only render view models; all API and store access goes through
//! the controller.

use dioxus::prelude::*;

use crate::controller::{
    AlbumCard, EmptyState, GalleryController, Listing, MediaOverview, PhotoTile,
    RacePhotoSection, VideoCard,
};
use crate::models::RaceAlbumRecord;
use crate::race_albums::RaceAlbumForm;
use crate::upload::{PhotoFile, UploadProgress, UploadSummary, VideoSubmission, ACCEPTED_PHOTO_TYPES};

const MODAL_BACKDROP: &str = "position: fixed; top: 0; left: 0; right: 0; bottom: 0; background: rgba(0, 0, 0, 0.6); z-index: 1100; display: flex; align-items: center; justify-content: center; padding: 16px;";
const MODAL_CARD: &str = "background: white; border-radius: 12px; padding: 20px; width: 100%; max-width: 420px; box-shadow: 0 8px 24px rgba(0,0,0,0.2);";
const INPUT_STYLE: &str = "width: 100%; padding: 12px; font-size: 15px; border: 2px solid #e0e0e0; border-radius: 8px; margin-bottom: 10px; box-sizing: border-box;";
const PRIMARY_BUTTON: &str = "padding: 10px 16px; background: #d62828; color: white; border: none; border-radius: 8px; font-size: 15px; font-weight: 600; cursor: pointer;";
const SECONDARY_BUTTON: &str = "padding: 10px 16px; background: #f0f0f0; color: #333; border: 1px solid #ddd; border-radius: 8px; font-size: 15px; cursor: pointer;";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MediaTab {
    Albums,
    RacePhotos,
    Videos,
}

impl MediaTab {
    fn label(&self) -> &'static str {
        match self {
            MediaTab::Albums => "📁 Álbuns",
            MediaTab::RacePhotos => "🏁 Por corrida",
            MediaTab::Videos => "🎬 Vídeos",
        }
    }
}

/// Media screen: album grid, race-grouped photos and videos.
///
/// Falls back to the locally stored race albums when the backend has no
/// album data.
#[component]
pub fn MediaSection() -> Element {
    let gallery = use_context::<GalleryController>();
    let is_admin = gallery.is_admin();
    let mut tab = use_signal(|| MediaTab::Albums);
    let mut open_album = use_signal(|| None::<i64>);
    let mut viewing_photo = use_signal(|| None::<String>);
    let mut playing_video = use_signal(|| None::<VideoCard>);

    let overview = use_resource(move || {
        let gallery = gallery.clone();
        async move { gallery.load_albums().await }
    });

    let content: Option<MediaOverview> = overview.read().clone();

    rsx! {
        div { style: "padding: 16px; max-width: 900px; margin: 0 auto;",
            h1 { style: "color: #d62828; margin: 0 0 12px; font-size: 24px; font-weight: 700;",
                "📸 Galeria"
            }

            div { style: "display: flex; gap: 8px; margin-bottom: 16px; flex-wrap: wrap;",
                for t in [MediaTab::Albums, MediaTab::RacePhotos, MediaTab::Videos] {
                    button {
                        key: "{t.label()}",
                        style: if tab() == t { PRIMARY_BUTTON } else { SECONDARY_BUTTON },
                        onclick: move |_| tab.set(t),
                        "{t.label()}"
                    }
                }
            }

            match content {
                None => rsx! {
                    div { style: "text-align: center; padding: 40px; color: #999;", "⏳ Carregando..." }
                },
                Some(overview) => rsx! {
                    match tab() {
                        MediaTab::Albums => rsx! {
                            match overview.albums {
                                Listing::Items(cards) => rsx! {
                                    div { style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(200px, 1fr)); gap: 12px;",
                                        for card in cards {
                                            AlbumCardView {
                                                key: "{card.id}",
                                                card: card.clone(),
                                                on_open: move |id| open_album.set(Some(id)),
                                            }
                                        }
                                    }
                                },
                                Listing::Empty(state) => rsx! {
                                    EmptyStateCard { state, is_admin }
                                    RaceAlbumManager {}
                                },
                            }
                        },
                        MediaTab::RacePhotos => rsx! {
                            match overview.race_photos {
                                Listing::Items(sections) => rsx! {
                                    for (i, section) in sections.into_iter().enumerate() {
                                        RacePhotoSectionView {
                                            key: "{i}",
                                            section,
                                            on_photo: move |url| viewing_photo.set(Some(url)),
                                        }
                                    }
                                },
                                Listing::Empty(state) => rsx! {
                                    EmptyStateCard { state, is_admin }
                                },
                            }
                        },
                        MediaTab::Videos => rsx! {
                            match overview.videos {
                                Listing::Items(cards) => rsx! {
                                    div { style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(240px, 1fr)); gap: 12px;",
                                        for (i, card) in cards.into_iter().enumerate() {
                                            VideoCardView {
                                                key: "{i}",
                                                card,
                                                on_play: move |card| playing_video.set(Some(card)),
                                            }
                                        }
                                    }
                                },
                                Listing::Empty(state) => rsx! {
                                    EmptyStateCard { state, is_admin }
                                },
                            }
                        },
                    }
                },
            }

            if let Some(id) = open_album() {
                AlbumOverlayView {
                    key: "{id}",
                    album_id: id,
                    on_close: move |_| open_album.set(None),
                }
            }
            if let Some(url) = viewing_photo() {
                ImageViewer { url, on_close: move |_| viewing_photo.set(None) }
            }
            if let Some(card) = playing_video() {
                VideoPlayer { card, on_close: move |_| playing_video.set(None) }
            }
        }
    }
}

#[component]
pub fn EmptyStateCard(state: EmptyState, #[props(default = false)] is_admin: bool) -> Element {
    rsx! {
        div { style: "text-align: center; padding: 40px 16px; color: #777; background: white; border-radius: 12px; margin-bottom: 16px;",
            div { style: "font-size: 48px; margin-bottom: 8px;", "{state.icon}" }
            h3 { style: "margin: 0 0 6px; color: #333;", "{state.title}" }
            p { style: "margin: 0;", "{state.message}" }
            if is_admin {
                if let Some(hint) = state.admin_hint {
                    p { style: "margin: 8px 0 0; font-size: 13px; color: #999;", "{hint}" }
                }
            }
        }
    }
}

#[component]
pub fn AlbumCardView(card: AlbumCard, on_open: EventHandler<i64>) -> Element {
    let id = card.id;

    rsx! {
        div {
            style: "background: white; border-radius: 12px; overflow: hidden; cursor: pointer; box-shadow: 0 2px 6px rgba(0,0,0,0.08);",
            onclick: move |_| on_open.call(id),
            if let Some(cover) = &card.cover_url {
                img {
                    src: "{cover}",
                    alt: "{card.name}",
                    style: "width: 100%; height: 140px; object-fit: cover; display: block;",
                }
            } else {
                div { style: "width: 100%; height: 140px; display: flex; align-items: center; justify-content: center; background: #f0f0f0; color: #999; font-size: 40px;",
                    "📷"
                }
            }
            div { style: "padding: 10px 12px;",
                div { style: "font-weight: 600; color: #222;", "{card.name}" }
                if let Some(race) = &card.race_name {
                    div { style: "font-size: 13px; color: #666;", "🏁 {race}" }
                }
                div { style: "font-size: 12px; color: #999; margin-top: 4px;",
                    "{card.media_count} itens"
                    if let Some(date) = &card.race_date {
                        " • {date}"
                    }
                }
            }
        }
    }
}

#[component]
pub fn VideoCardView(card: VideoCard, on_play: EventHandler<VideoCard>) -> Element {
    let clicked = card.clone();

    rsx! {
        div {
            style: "background: white; border-radius: 12px; overflow: hidden; cursor: pointer; box-shadow: 0 2px 6px rgba(0,0,0,0.08);",
            onclick: move |_| on_play.call(clicked.clone()),
            div { style: "position: relative;",
                img {
                    src: "{card.thumbnail}",
                    alt: "{card.title}",
                    style: "width: 100%; height: 150px; object-fit: cover; display: block; background: #222;",
                }
                div { style: "position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); color: white; font-size: 40px;",
                    "▶"
                }
            }
            div { style: "padding: 10px 12px;",
                div { style: "font-weight: 600; color: #222;", "{card.title}" }
                if let Some(album) = &card.album_name {
                    div { style: "font-size: 13px; color: #666;", "📁 {album}" }
                }
                if let Some(description) = &card.description {
                    div { style: "font-size: 13px; color: #999; margin-top: 4px;", "{description}" }
                }
            }
        }
    }
}

/// One collapsible race group; the photo grid is only rendered while expanded
#[component]
pub fn RacePhotoSectionView(section: RacePhotoSection, on_photo: EventHandler<String>) -> Element {
    let mut state = use_signal(|| section.section.clone());
    let expanded = state.read().is_expanded();
    let photos: Vec<PhotoTile> = state.read().content().cloned().unwrap_or_default();

    rsx! {
        div { style: "background: white; border-radius: 12px; margin-bottom: 12px; overflow: hidden;",
            div {
                style: "display: flex; justify-content: space-between; align-items: center; padding: 14px 16px; cursor: pointer;",
                onclick: move |_| {
                    state.write().toggle();
                },
                div {
                    div { style: "font-weight: 600; color: #222;", "{section.heading}" }
                    div { style: "font-size: 13px; color: #777;", "{section.subtitle}" }
                }
                span { style: "font-size: 18px; color: #999;",
                    if expanded { "▲" } else { "▼" }
                }
            }
            if expanded {
                div { style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(110px, 1fr)); gap: 6px; padding: 0 16px 16px;",
                    for (i, photo) in photos.into_iter().enumerate() {
                        PhotoThumb { key: "{i}", photo, on_click: move |url| on_photo.call(url) }
                    }
                }
            }
        }
    }
}

#[component]
fn PhotoThumb(photo: PhotoTile, on_click: EventHandler<String>) -> Element {
    let url = photo.url.clone();

    rsx! {
        img {
            src: "{photo.url}",
            alt: "{photo.alt}",
            style: "width: 100%; height: 110px; object-fit: cover; border-radius: 6px; cursor: pointer;",
            onclick: move |_| on_click.call(url.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum OverlayDialog {
    UploadPhotos,
    UploadVideo,
    Photo(String),
    Video(VideoCard),
    Notice(String),
}

/// Full-screen album detail with photo and video sub-sections
#[component]
pub fn AlbumOverlayView(album_id: i64, on_close: EventHandler<()>) -> Element {
    let gallery = use_context::<GalleryController>();
    let mut dialog = use_signal(|| None::<OverlayDialog>);

    let mut album = use_resource(move || {
        let gallery = gallery.clone();
        async move { gallery.open_album(album_id).await }
    });

    let loaded = album.read().clone();

    rsx! {
        div { style: "position: fixed; top: 0; left: 0; right: 0; bottom: 0; background: rgba(0, 0, 0, 0.95); z-index: 1000; display: flex; flex-direction: column; overflow-y: auto;",
            div { style: "display: flex; justify-content: space-between; align-items: center; padding: 16px; background: rgba(0, 0, 0, 0.7); color: white;",
                match &loaded {
                    Some(Some(overlay)) => rsx! {
                        div {
                            div { style: "font-size: 20px; font-weight: 700;", "{overlay.name}" }
                            if let Some(race) = &overlay.race_name {
                                div { style: "font-size: 14px; color: #ccc;", "🏁 {race}" }
                            }
                        }
                    },
                    _ => rsx! { div {} },
                }
                button {
                    style: "width: 40px; height: 40px; background: rgba(255, 255, 255, 0.2); color: white; border-radius: 50%; font-size: 24px; cursor: pointer; border: none;",
                    onclick: move |_| on_close.call(()),
                    "×"
                }
            }

            match loaded {
                None => rsx! {
                    div { style: "color: white; font-size: 48px; text-align: center; padding: 40px;", "⏳" }
                },
                Some(None) => rsx! {
                    div { style: "color: white; text-align: center; padding: 40px;", "Erro ao carregar o álbum" }
                },
                Some(Some(overlay)) => rsx! {
                    div { style: "padding: 16px; color: white;",
                        if overlay.can_upload {
                            div { style: "display: flex; gap: 8px; margin-bottom: 16px;",
                                button {
                                    style: PRIMARY_BUTTON,
                                    onclick: move |_| dialog.set(Some(OverlayDialog::UploadPhotos)),
                                    "📤 Enviar fotos"
                                }
                                button {
                                    style: PRIMARY_BUTTON,
                                    onclick: move |_| dialog.set(Some(OverlayDialog::UploadVideo)),
                                    "🎬 Adicionar vídeo"
                                }
                            }
                        }
                        if let Some(link) = &overlay.google_photos_link {
                            a {
                                href: "{link}",
                                target: "_blank",
                                style: "display: inline-block; color: #8ecae6; margin-bottom: 16px;",
                                "Ver no Google Photos ↗"
                            }
                        }

                        h3 { style: "margin: 8px 0;", "📷 Fotos ({overlay.photos.len()})" }
                        if overlay.photos.is_empty() {
                            p { style: "color: #aaa;", "Nenhuma foto neste álbum" }
                        } else {
                            div { style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(120px, 1fr)); gap: 6px;",
                                for (i, photo) in overlay.photos.clone().into_iter().enumerate() {
                                    PhotoThumb {
                                        key: "{i}",
                                        photo,
                                        on_click: move |url| dialog.set(Some(OverlayDialog::Photo(url))),
                                    }
                                }
                            }
                        }

                        h3 { style: "margin: 20px 0 8px;", "🎬 Vídeos ({overlay.videos.len()})" }
                        if overlay.videos.is_empty() {
                            p { style: "color: #aaa;", "Nenhum vídeo neste álbum" }
                        } else {
                            div { style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 12px;",
                                for (i, card) in overlay.videos.clone().into_iter().enumerate() {
                                    VideoCardView {
                                        key: "{i}",
                                        card,
                                        on_play: move |card| dialog.set(Some(OverlayDialog::Video(card))),
                                    }
                                }
                            }
                        }
                    }
                },
            }

            match dialog() {
                Some(OverlayDialog::UploadPhotos) => rsx! {
                    UploadPhotoDialog {
                        album_id,
                        on_done: move |summary: UploadSummary| {
                            dialog.set(Some(OverlayDialog::Notice(summary.message())));
                            album.restart();
                        },
                        on_cancel: move |_| dialog.set(None),
                    }
                },
                Some(OverlayDialog::UploadVideo) => rsx! {
                    UploadVideoDialog {
                        album_id,
                        on_done: move |_| {
                            dialog.set(Some(OverlayDialog::Notice("Vídeo adicionado com sucesso!".to_string())));
                            album.restart();
                        },
                        on_cancel: move |_| dialog.set(None),
                    }
                },
                Some(OverlayDialog::Photo(url)) => rsx! {
                    ImageViewer { url, on_close: move |_| dialog.set(None) }
                },
                Some(OverlayDialog::Video(card)) => rsx! {
                    VideoPlayer { card, on_close: move |_| dialog.set(None) }
                },
                Some(OverlayDialog::Notice(message)) => rsx! {
                    AlertDialog { message, on_close: move |_| dialog.set(None) }
                },
                None => rsx! {},
            }
        }
    }
}

#[component]
pub fn ImageViewer(url: String, on_close: EventHandler<()>) -> Element {
    rsx! {
        div {
            style: "position: fixed; top: 0; left: 0; right: 0; bottom: 0; background: rgba(0, 0, 0, 0.95); z-index: 1200; display: flex; flex-direction: column;",
            onclick: move |_| on_close.call(()),
            div { style: "display: flex; justify-content: flex-end; padding: 16px;",
                button {
                    style: "width: 40px; height: 40px; background: rgba(255, 255, 255, 0.2); color: white; border-radius: 50%; font-size: 24px; cursor: pointer; border: none;",
                    onclick: move |_| on_close.call(()),
                    "×"
                }
            }
            div { style: "flex: 1; display: flex; align-items: center; justify-content: center; padding: 20px;",
                img {
                    src: "{url}",
                    style: "max-width: 100%; max-height: 100%; object-fit: contain;",
                    onclick: move |evt| evt.stop_propagation(),
                }
            }
        }
    }
}

#[component]
pub fn VideoPlayer(card: VideoCard, on_close: EventHandler<()>) -> Element {
    rsx! {
        div {
            style: "position: fixed; top: 0; left: 0; right: 0; bottom: 0; background: rgba(0, 0, 0, 0.95); z-index: 1200; display: flex; flex-direction: column;",
            div { style: "display: flex; justify-content: space-between; align-items: center; padding: 16px; color: white;",
                div { style: "font-size: 18px; font-weight: 600;", "{card.title}" }
                button {
                    style: "width: 40px; height: 40px; background: rgba(255, 255, 255, 0.2); color: white; border-radius: 50%; font-size: 24px; cursor: pointer; border: none;",
                    onclick: move |_| on_close.call(()),
                    "×"
                }
            }
            div { style: "flex: 1; display: flex; align-items: center; justify-content: center; padding: 20px;",
                iframe {
                    src: "{card.embed_url}",
                    style: "width: 100%; max-width: 900px; aspect-ratio: 16 / 9; border: none;",
                    "allow": "autoplay; encrypted-media",
                    "allowfullscreen": "true",
                }
            }
        }
    }
}

/// File picker plus sequential upload with a progress bar
#[component]
pub fn UploadPhotoDialog(
    album_id: i64,
    on_done: EventHandler<UploadSummary>,
    on_cancel: EventHandler<()>,
) -> Element {
    let gallery = use_context::<GalleryController>();
    let mut files = use_signal(Vec::<PhotoFile>::new);
    let mut title = use_signal(String::new);
    let mut progress = use_signal(|| None::<UploadProgress>);
    let mut error = use_signal(|| None::<String>);

    let uploading = progress().is_some();

    let start_upload = move |_| {
        let gallery = gallery.clone();
        spawn(async move {
            let selected = files.peek().clone();
            let shared_title = title.peek().clone();
            let result = gallery
                .upload_photos(album_id, selected, &shared_title, |p| progress.set(Some(p)))
                .await;
            progress.set(None);
            match result {
                Ok(summary) => on_done.call(summary),
                Err(e) => error.set(Some(e.user_message())),
            }
        });
    };

    rsx! {
        div { style: MODAL_BACKDROP,
            div { style: MODAL_CARD,
                h3 { style: "margin: 0 0 12px;", "📤 Enviar fotos" }
                input {
                    r#type: "file",
                    accept: ACCEPTED_PHOTO_TYPES,
                    multiple: true,
                    disabled: uploading,
                    style: INPUT_STYLE,
                    onchange: move |evt: FormEvent| async move {
                        let mut picked = Vec::new();
                        for file in evt.files() {
                            match file.read_bytes().await {
                                Ok(bytes) => picked.push(PhotoFile::new(file.name(), bytes.to_vec())),
                                Err(e) => log::warn!("Could not read {}: {:?}", file.name(), e),
                            }
                        }
                        files.set(picked);
                    },
                }
                div { style: "font-size: 13px; color: #777; margin-bottom: 10px;",
                    "{files.read().len()} foto(s) selecionada(s)"
                }
                input {
                    r#type: "text",
                    placeholder: "Título (opcional)",
                    value: "{title}",
                    disabled: uploading,
                    style: INPUT_STYLE,
                    oninput: move |e| title.set(e.value()),
                }

                if let Some(p) = progress() {
                    div { style: "margin: 8px 0;",
                        div { style: "height: 8px; background: #eee; border-radius: 4px; overflow: hidden;",
                            div { style: "height: 100%; width: {p.percent()}%; background: #d62828;" }
                        }
                        div { style: "font-size: 13px; color: #555; margin-top: 4px;", "{p.label()}" }
                    }
                }

                div { style: "display: flex; gap: 8px; justify-content: flex-end; margin-top: 12px;",
                    button {
                        style: SECONDARY_BUTTON,
                        disabled: uploading,
                        onclick: move |_| on_cancel.call(()),
                        "Cancelar"
                    }
                    button {
                        style: PRIMARY_BUTTON,
                        disabled: uploading,
                        onclick: start_upload,
                        "Enviar"
                    }
                }
            }
        }
        if let Some(message) = error() {
            AlertDialog { message, on_close: move |_| error.set(None) }
        }
    }
}

#[component]
pub fn UploadVideoDialog(
    album_id: i64,
    on_done: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let gallery = use_context::<GalleryController>();
    let mut url = use_signal(String::new);
    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut sending = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let submit = move |_| {
        let gallery = gallery.clone();
        spawn(async move {
            sending.set(true);
            let video = VideoSubmission {
                url: url.peek().clone(),
                title: title.peek().clone(),
                description: description.peek().clone(),
            };
            let result = gallery.upload_video(album_id, video).await;
            sending.set(false);
            match result {
                Ok(()) => on_done.call(()),
                Err(e) => error.set(Some(e.user_message())),
            }
        });
    };

    rsx! {
        div { style: MODAL_BACKDROP,
            div { style: MODAL_CARD,
                h3 { style: "margin: 0 0 12px;", "🎬 Adicionar vídeo" }
                input {
                    r#type: "url",
                    placeholder: "https://www.youtube.com/watch?v=...",
                    value: "{url}",
                    style: INPUT_STYLE,
                    oninput: move |e| url.set(e.value()),
                }
                input {
                    r#type: "text",
                    placeholder: "Título",
                    value: "{title}",
                    style: INPUT_STYLE,
                    oninput: move |e| title.set(e.value()),
                }
                textarea {
                    placeholder: "Descrição",
                    value: "{description}",
                    style: INPUT_STYLE,
                    oninput: move |e| description.set(e.value()),
                }
                div { style: "display: flex; gap: 8px; justify-content: flex-end;",
                    button {
                        style: SECONDARY_BUTTON,
                        disabled: sending(),
                        onclick: move |_| on_cancel.call(()),
                        "Cancelar"
                    }
                    button {
                        style: PRIMARY_BUTTON,
                        disabled: sending(),
                        onclick: submit,
                        if sending() { "Enviando..." } else { "Adicionar" }
                    }
                }
            }
        }
        if let Some(message) = error() {
            AlertDialog { message, on_close: move |_| error.set(None) }
        }
    }
}

/// Locally stored race albums, shown while the backend has no albums
#[component]
pub fn RaceAlbumManager() -> Element {
    let gallery = use_context::<GalleryController>();
    let is_admin = gallery.is_admin();
    let remembered = use_hook({
        let gallery = gallery.clone();
        move || gallery.remembered_inputs()
    });

    let mut albums = use_signal({
        let gallery = gallery.clone();
        move || gallery.display_race_albums()
    });
    let mut name = use_signal(String::new);
    let mut link = use_signal(|| remembered.album_link.clone().unwrap_or_default());
    let mut cover = use_signal(String::new);
    let mut drive_folder = use_signal(|| remembered.drive_folder.clone().unwrap_or_default());
    let mut pending_delete = use_signal(|| None::<String>);
    let mut alert = use_signal(|| None::<String>);

    let defaults = gallery.load_default_photos();

    let add_gallery = gallery.clone();
    let add_album = move |_| {
        let form = RaceAlbumForm {
            name: name.peek().clone(),
            link: link.peek().clone(),
            cover: cover.peek().clone(),
        };
        match add_gallery.add_race_album(&form) {
            Ok(_) => {
                albums.set(add_gallery.display_race_albums());
                name.set(String::new());
                cover.set(String::new());
            }
            Err(e) => alert.set(Some(e.user_message())),
        }
    };

    let folder_gallery = gallery.clone();
    let delete_gallery = gallery.clone();

    rsx! {
        div { style: "background: white; border-radius: 12px; padding: 16px; margin-bottom: 16px;",
            h3 { style: "margin: 0 0 12px; color: #222;", "🏎️ Álbuns das corridas" }

            if is_admin {
                div { style: "margin-bottom: 16px;",
                    input {
                        r#type: "text",
                        placeholder: "Nome da corrida",
                        value: "{name}",
                        style: INPUT_STYLE,
                        oninput: move |e| name.set(e.value()),
                    }
                    input {
                        r#type: "url",
                        placeholder: "https://photos.app.goo.gl/...",
                        value: "{link}",
                        style: INPUT_STYLE,
                        oninput: move |e| link.set(e.value()),
                    }
                    input {
                        r#type: "text",
                        placeholder: "Foto de capa (URL, link do Drive ou ID)",
                        value: "{cover}",
                        style: INPUT_STYLE,
                        oninput: move |e| cover.set(e.value()),
                    }
                    input {
                        r#type: "text",
                        placeholder: "Pasta do Google Drive",
                        value: "{drive_folder}",
                        style: INPUT_STYLE,
                        oninput: move |e| drive_folder.set(e.value()),
                        onchange: move |e| {
                            if let Err(err) = folder_gallery.remember_drive_folder(&e.value()) {
                                log::warn!("Could not remember drive folder: {}", err);
                            }
                        },
                    }
                    button { style: PRIMARY_BUTTON, onclick: add_album, "+ Adicionar álbum" }
                }
            }

            if albums.read().is_empty() {
                p { style: "color: #999; text-align: center;", "Nenhum álbum salvo" }
            } else {
                for album in albums() {
                    RaceAlbumRow {
                        key: "{album.id}",
                        album,
                        can_delete: is_admin,
                        on_delete: move |id| pending_delete.set(Some(id)),
                    }
                }
            }

            h4 { style: "margin: 16px 0 8px; color: #555;", "Fotos em destaque" }
            div { style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(150px, 1fr)); gap: 8px;",
                for photo in defaults {
                    div { key: "{photo.slot.label()}", style: "position: relative;",
                        img {
                            src: "{photo.url}",
                            alt: "{photo.slot.label()}",
                            style: "width: 100%; height: 110px; object-fit: cover; border-radius: 8px;",
                        }
                        span { style: "position: absolute; bottom: 6px; left: 6px; background: rgba(0,0,0,0.6); color: white; font-size: 12px; padding: 2px 6px; border-radius: 4px;",
                            "{photo.slot.label()}"
                        }
                    }
                }
            }
        }

        if let Some(id) = pending_delete() {
            ConfirmDialog {
                message: "Tem certeza que deseja remover este álbum?".to_string(),
                on_confirm: move |_| {
                    match delete_gallery.remove_race_album(&id, true) {
                        Ok(_) => albums.set(delete_gallery.display_race_albums()),
                        Err(e) => alert.set(Some(e.user_message())),
                    }
                    pending_delete.set(None);
                },
                on_cancel: move |_| pending_delete.set(None),
            }
        }
        if let Some(message) = alert() {
            AlertDialog { message, on_close: move |_| alert.set(None) }
        }
    }
}

#[component]
fn RaceAlbumRow(album: RaceAlbumRecord, can_delete: bool, on_delete: EventHandler<String>) -> Element {
    let id = album.id.clone();

    rsx! {
        div { style: "display: flex; align-items: center; gap: 12px; padding: 8px 0; border-bottom: 1px solid #eee;",
            if let Some(url) = &album.cover_url {
                img {
                    src: "{url}",
                    style: "width: 56px; height: 56px; object-fit: cover; border-radius: 6px;",
                }
            }
            a {
                href: "{album.link}",
                target: "_blank",
                style: "flex: 1; color: #0066cc; font-weight: 600; text-decoration: none;",
                "{album.name}"
            }
            if can_delete {
                button {
                    style: SECONDARY_BUTTON,
                    onclick: move |_| on_delete.call(id.clone()),
                    "🗑️"
                }
            }
        }
    }
}

#[component]
pub fn AlertDialog(message: String, on_close: EventHandler<()>) -> Element {
    rsx! {
        div { style: MODAL_BACKDROP,
            div { style: MODAL_CARD,
                p { style: "margin: 0 0 16px; color: #222; font-size: 15px;", "{message}" }
                div { style: "display: flex; justify-content: flex-end;",
                    button { style: PRIMARY_BUTTON, onclick: move |_| on_close.call(()), "OK" }
                }
            }
        }
    }
}

#[component]
pub fn ConfirmDialog(
    message: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        div { style: MODAL_BACKDROP,
            div { style: MODAL_CARD,
                p { style: "margin: 0 0 16px; color: #222; font-size: 15px;", "{message}" }
                div { style: "display: flex; gap: 8px; justify-content: flex-end;",
                    button { style: SECONDARY_BUTTON, onclick: move |_| on_cancel.call(()), "Cancelar" }
                    button { style: PRIMARY_BUTTON, onclick: move |_| on_confirm.call(()), "Confirmar" }
                }
            }
        }
    }
}
