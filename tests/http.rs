use once_cell::sync::Lazy;
use reqwest::Client;
use serde::Deserialize;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
struct TaskRecord {
    id: String,
    text: String,
    completed: bool,
    #[serde(rename = "completedAt")]
    completed_at: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct DayResponse {
    date: String,
    filter: String,
    tasks: Vec<TaskRecord>,
    remaining: usize,
    total: usize,
}

#[derive(Debug, Deserialize)]
struct DayCell {
    date: String,
    done: usize,
    total: usize,
    ratio: u32,
}

#[derive(Debug, Deserialize)]
struct WeekSummary {
    completed: usize,
    total: usize,
    rate: u32,
}

#[derive(Debug, Deserialize)]
struct RecentEntry {
    days_ago: u32,
    label: String,
    text: String,
}

#[derive(Debug, Deserialize)]
struct StatsResponse {
    week: Vec<DayCell>,
    summary: WeekSummary,
    recent_completed: Vec<RecentEntry>,
}

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Once;

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

fn unique_data_path() -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!("daily_todo_http_{}_{}.json", std::process::id(), nanos));
    path.to_string_lossy().to_string()
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/day")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server_at(data_path: &str) -> TestServer {
    let port = pick_free_port();
    let child = Command::new(env!("CARGO_BIN_EXE_daily_todo"))
        .env("PORT", port.to_string())
        .env("APP_DATA_PATH", data_path)
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server_at(&unique_data_path()).await);
    *guard = Some(Arc::clone(&server));
    server
}

async fn get_day(client: &Client, base_url: &str, date: &str, filter: Option<&str>) -> DayResponse {
    let mut url = format!("{base_url}/api/day?date={date}");
    if let Some(filter) = filter {
        url.push_str(&format!("&filter={filter}"));
    }
    client
        .get(url)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

async fn add_task(client: &Client, base_url: &str, date: &str, text: &str) -> reqwest::Response {
    client
        .post(format!("{base_url}/api/add"))
        .json(&serde_json::json!({ "date": date, "text": text }))
        .send()
        .await
        .unwrap()
}

async fn toggle_task(client: &Client, base_url: &str, date: &str, id: &str) -> reqwest::Response {
    client
        .post(format!("{base_url}/api/toggle"))
        .json(&serde_json::json!({ "date": date, "id": id }))
        .send()
        .await
        .unwrap()
}

#[tokio::test]
async fn http_add_lists_trimmed_task() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    let date = "2026-03-02";

    let response = add_task(&client, &server.base_url, date, "  write tests  ").await;
    assert!(response.status().is_success());

    let day = get_day(&client, &server.base_url, date, None).await;
    assert_eq!(day.date, date);
    assert_eq!(day.filter, "all");
    assert_eq!(day.total, 1);
    assert_eq!(day.remaining, 1);
    assert_eq!(day.tasks[0].text, "write tests");
    assert!(!day.tasks[0].completed);
    assert_eq!(day.tasks[0].completed_at, None);
    assert!(!day.tasks[0].id.is_empty());
}

#[tokio::test]
async fn http_add_rejects_blank_text() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    let date = "2026-03-03";

    let before = get_day(&client, &server.base_url, date, None).await;

    let response = add_task(&client, &server.base_url, date, "   ").await;
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);

    let after = get_day(&client, &server.base_url, date, None).await;
    assert_eq!(after.total, before.total);
}

#[tokio::test]
async fn http_toggle_round_trip() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    let date = "2026-03-04";

    add_task(&client, &server.base_url, date, "toggle me").await;
    let id = get_day(&client, &server.base_url, date, None).await.tasks[0]
        .id
        .clone();

    let response = toggle_task(&client, &server.base_url, date, &id).await;
    assert!(response.status().is_success());
    let day = get_day(&client, &server.base_url, date, None).await;
    assert!(day.tasks[0].completed);
    assert!(day.tasks[0].completed_at.is_some());
    assert_eq!(day.remaining, 0);

    toggle_task(&client, &server.base_url, date, &id).await;
    let day = get_day(&client, &server.base_url, date, None).await;
    assert!(!day.tasks[0].completed);
    assert_eq!(day.tasks[0].completed_at, None);
    assert_eq!(day.remaining, 1);

    // unknown ids are a quiet no-op
    let response = toggle_task(&client, &server.base_url, date, "no-such-id").await;
    assert!(response.status().is_success());
    let day = get_day(&client, &server.base_url, date, None).await;
    assert_eq!(day.total, 1);
    assert!(!day.tasks[0].completed);
}

#[tokio::test]
async fn http_filters_split_the_bucket() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    let date = "2026-03-05";

    add_task(&client, &server.base_url, date, "stays open").await;
    add_task(&client, &server.base_url, date, "gets done").await;
    let done_id = get_day(&client, &server.base_url, date, None)
        .await
        .tasks
        .iter()
        .find(|task| task.text == "gets done")
        .unwrap()
        .id
        .clone();
    toggle_task(&client, &server.base_url, date, &done_id).await;

    let active = get_day(&client, &server.base_url, date, Some("active")).await;
    assert_eq!(active.filter, "active");
    assert_eq!(active.tasks.len(), 1);
    assert_eq!(active.tasks[0].text, "stays open");
    assert_eq!(active.total, 2);

    let completed = get_day(&client, &server.base_url, date, Some("completed")).await;
    assert_eq!(completed.tasks.len(), 1);
    assert_eq!(completed.tasks[0].text, "gets done");

    // anything unrecognized falls back to the full list
    let all = get_day(&client, &server.base_url, date, Some("bogus")).await;
    assert_eq!(all.filter, "all");
    assert_eq!(all.tasks.len(), 2);
}

#[tokio::test]
async fn http_delete_and_clear_completed() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    let date = "2026-03-06";

    add_task(&client, &server.base_url, date, "keep").await;
    add_task(&client, &server.base_url, date, "finish").await;
    add_task(&client, &server.base_url, date, "drop").await;

    let day = get_day(&client, &server.base_url, date, None).await;
    let finish_id = day
        .tasks
        .iter()
        .find(|task| task.text == "finish")
        .unwrap()
        .id
        .clone();
    let drop_id = day
        .tasks
        .iter()
        .find(|task| task.text == "drop")
        .unwrap()
        .id
        .clone();

    toggle_task(&client, &server.base_url, date, &finish_id).await;

    let response = client
        .post(format!("{}/api/delete", server.base_url))
        .json(&serde_json::json!({ "date": date, "id": drop_id }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let response = client
        .post(format!("{}/api/clear-completed", server.base_url))
        .json(&serde_json::json!({ "date": date }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let day = get_day(&client, &server.base_url, date, None).await;
    assert_eq!(day.tasks.len(), 1);
    assert_eq!(day.tasks[0].text, "keep");
    assert!(day.tasks.iter().all(|task| !task.completed));
}

#[tokio::test]
async fn http_stats_chart_and_history() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    let selected = "2026-04-10";
    let yesterday = "2026-04-09";

    for text in ["one", "two", "three"] {
        add_task(&client, &server.base_url, selected, text).await;
    }
    let day = get_day(&client, &server.base_url, selected, None).await;
    for text in ["one", "two"] {
        let id = day
            .tasks
            .iter()
            .find(|task| task.text == text)
            .unwrap()
            .id
            .clone();
        toggle_task(&client, &server.base_url, selected, &id).await;
    }

    add_task(&client, &server.base_url, yesterday, "finished yesterday").await;
    let id = get_day(&client, &server.base_url, yesterday, None).await.tasks[0]
        .id
        .clone();
    toggle_task(&client, &server.base_url, yesterday, &id).await;

    let stats: StatsResponse = client
        .get(format!("{}/api/stats?date={selected}", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(stats.week.len(), 7);
    assert_eq!(stats.week[0].date, "2026-04-04");
    let today_cell = stats.week.last().unwrap();
    assert_eq!(today_cell.date, selected);
    assert_eq!(today_cell.done, 2);
    assert_eq!(today_cell.total, 3);
    assert_eq!(today_cell.ratio, 67);

    assert_eq!(stats.summary.completed, 3);
    assert_eq!(stats.summary.total, 4);
    assert_eq!(stats.summary.rate, 75);

    let entry = stats
        .recent_completed
        .iter()
        .find(|entry| entry.text == "finished yesterday")
        .expect("missing history entry");
    assert_eq!(entry.days_ago, 1);
    assert_eq!(entry.label, "1 day ago");
}

#[tokio::test]
async fn http_rejects_malformed_date() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/api/day?date=not-a-date", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn http_legacy_array_file_migrates_to_today() {
    let _guard = TEST_LOCK.lock().await;
    let data_path = unique_data_path();
    std::fs::write(
        &data_path,
        r#"[
            {"text": "buy milk"},
            {"text": "   "},
            {"id": "keep", "text": "call home", "completed": true, "completedAt": 123}
        ]"#,
    )
    .unwrap();

    let server = spawn_server_at(&data_path).await;
    let client = Client::new();

    // no date parameter: the migrated bucket lives under today's key
    let day: DayResponse = client
        .get(format!("{}/api/day", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(day.total, 2);
    assert_eq!(day.tasks[0].text, "buy milk");
    assert!(!day.tasks[0].id.is_empty());
    assert_eq!(day.tasks[1].id, "keep");
    assert!(day.tasks[1].completed);
    assert_eq!(day.tasks[1].completed_at, Some(123));
    assert_eq!(day.remaining, 1);
}

#[tokio::test]
async fn http_corrupt_file_loads_as_empty_store() {
    let _guard = TEST_LOCK.lock().await;
    let data_path = unique_data_path();
    std::fs::write(&data_path, "{ this is not json").unwrap();

    let server = spawn_server_at(&data_path).await;
    let client = Client::new();

    let day: DayResponse = client
        .get(format!("{}/api/day", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(day.total, 0);
    assert!(day.tasks.is_empty());
}
