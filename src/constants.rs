//! Shared UI constants such as colors, sizing defaults, and scripts.

pub const BG_BASE: &str = "#0a0a0b";
pub const BG_ELEVATED: &str = "#141414";
pub const BG_SURFACE: &str = "#1a1a1a";
pub const BG_HOVER: &str = "#262626";
pub const BG_ACTIVE_ITEM: &str = "#172033";

pub const BORDER_SUBTLE: &str = "#1f1f1f";
pub const BORDER_DEFAULT: &str = "#27272a";
pub const BORDER_STRONG: &str = "#3f3f46";
pub const BORDER_ACCENT: &str = "#3b82f6";

pub const TEXT_PRIMARY: &str = "#fafafa";
pub const TEXT_SECONDARY: &str = "#a1a1aa";
pub const TEXT_MUTED: &str = "#71717a";
pub const TEXT_DIM: &str = "#52525b";

pub const ACCENT_LOAD: &str = "#4285f4";
pub const ACCENT_ADD: &str = "#0c9c72";
pub const ACCENT_EXPORT: &str = "#ffab00";
pub const ACCENT_DELETE: &str = "#f44336";

pub const LIST_PANEL_WIDTH: f64 = 400.0;

pub const DEFAULT_VIDEO_ID: &str = "dQw4w9WgXcQ";
pub const DEFAULT_SEGMENT_SPAN_SECONDS: f64 = 10.0;
pub const SEGMENT_POLL_INTERVAL_MS: u64 = 100;
pub const DEFAULT_PLAYER_WIDTH: f64 = 640.0;
pub const DEFAULT_PLAYER_HEIGHT: f64 = 390.0;
pub const PLAYER_MIN_WIDTH: f64 = 300.0;
pub const PLAYER_MIN_HEIGHT: f64 = 200.0;
pub const DEFAULT_EXPORT_FILE_NAME: &str = "timestamps.json";

/// Element the player script mounts the iframe into.
pub const PLAYER_MOUNT_ID: &str = "yt-player-mount";

/// YouTube rejects embeds that arrive without a referrer.
pub const CUSTOM_HEAD: &str =
    r#"<meta name="referrer" content="strict-origin-when-cross-origin">"#;

pub const YOUTUBE_PLAYER_SCRIPT: &str = r#"
const mountId = "yt-player-mount";
let player = null;
let ready = false;
let lastSeq = 0;
let seekTarget = null;
let seekAt = 0;
let pendingVideoId = null;

function loadApi() {
    return new Promise((resolve) => {
        if (window.YT && window.YT.Player) {
            resolve();
            return;
        }
        const previous = window.onYouTubeIframeAPIReady;
        window.onYouTubeIframeAPIReady = () => {
            if (previous) {
                previous();
            }
            resolve();
        };
        if (!document.getElementById("yt-iframe-api")) {
            const tag = document.createElement("script");
            tag.id = "yt-iframe-api";
            tag.src = "https://www.youtube.com/iframe_api";
            document.head.appendChild(tag);
        }
    });
}

function waitForMount() {
    return new Promise((resolve) => {
        const check = () => {
            const host = document.getElementById(mountId);
            if (host) {
                resolve(host);
                return;
            }
            setTimeout(check, 100);
        };
        check();
    });
}

function reportTime() {
    if (!ready || !player || typeof player.getCurrentTime !== "function") {
        return;
    }
    const seconds = player.getCurrentTime() || 0;
    if (seekTarget !== null) {
        // Hold reports until the seek has landed (or a second has passed).
        if (Math.abs(seconds - seekTarget) > 1.0 && Date.now() - seekAt < 1000) {
            return;
        }
        seekTarget = null;
    }
    dioxus.send({ kind: "time", seconds: seconds, seq: lastSeq });
}

let mount = null;
while (!mount) {
    const msg = await dioxus.recv();
    if (msg && msg.kind === "mount") {
        mount = msg;
    }
}

await loadApi();
const host = await waitForMount();
const target = document.createElement("div");
host.appendChild(target);

player = new YT.Player(target, {
    videoId: mount.video_id,
    width: mount.width,
    height: mount.height,
    playerVars: { autoplay: 0 },
    events: {
        onReady: () => {
            ready = true;
            if (pendingVideoId) {
                player.cueVideoById(pendingVideoId);
                pendingVideoId = null;
            }
            dioxus.send({ kind: "ready" });
        },
        onError: (event) => {
            dioxus.send({ kind: "error", code: event.data });
        },
    },
});

setInterval(reportTime, 50);

while (true) {
    const msg = await dioxus.recv();
    if (!msg) {
        continue;
    }
    switch (msg.kind) {
        case "cue":
            if (ready) {
                player.cueVideoById(msg.video_id);
            } else {
                pendingVideoId = msg.video_id;
            }
            break;
        case "seek":
            lastSeq = msg.seq;
            if (ready) {
                seekTarget = msg.seconds;
                seekAt = Date.now();
                player.seekTo(msg.seconds, msg.allow_seek_ahead);
            }
            break;
        case "play":
            if (ready) {
                player.playVideo();
            }
            break;
        case "pause":
            if (ready) {
                player.pauseVideo();
            }
            break;
        case "resize":
            if (player && typeof player.setSize === "function") {
                player.setSize(msg.width, msg.height);
            }
            break;
        default:
            break;
    }
}
"#;
