// tests/issue_dates.rs
use chrono::{Days, Duration};
use newsdesk_core::application::commands::articles::PublishArticleCommand;
use std::sync::Arc;

mod support;
use support::{TestApp, approved_article, editor, fixed_now};

async fn publish(app: &TestApp, title: &str) -> chrono::NaiveDate {
    let approved = approved_article(app, title).await;
    app.services
        .article_commands
        .publish_article(&editor(), PublishArticleCommand { id: approved.id })
        .await
        .unwrap()
        .issue_date
        .expect("published article has an issue date")
}

/// 1 日 5 本までが当日号、それ以降は翌日号に回る
#[tokio::test]
async fn sixth_publish_of_the_day_moves_to_tomorrow() {
    let app = TestApp::new();
    let today = fixed_now().date_naive();
    let tomorrow = today.checked_add_days(Days::new(1)).unwrap();

    for i in 0..5 {
        assert_eq!(publish(&app, &format!("Nota {i}")).await, today);
    }
    assert_eq!(publish(&app, "Nota 5").await, tomorrow);
    // 翌日号も当日分の超過としてだけ数えられ、明後日には飛ばない
    assert_eq!(publish(&app, "Nota 6").await, tomorrow);
}

/// 前日の掲載数は当日の枠に影響しない
#[tokio::test]
async fn quota_is_counted_per_issue_date() {
    let app = TestApp::new();
    let today = fixed_now().date_naive();

    for i in 0..6 {
        publish(&app, &format!("Ayer {i}")).await;
    }

    app.clock.advance(Duration::days(1));
    let next_day = today.checked_add_days(Days::new(1)).unwrap();
    // 翌日号にはすでに 1 本入っているので、残り 4 本まで当日扱い
    for i in 0..4 {
        assert_eq!(publish(&app, &format!("Hoy {i}")).await, next_day);
    }
    assert_eq!(
        publish(&app, "Hoy 4").await,
        next_day.checked_add_days(Days::new(1)).unwrap()
    );
}

#[tokio::test]
async fn unpublished_articles_do_not_consume_the_quota() {
    let app = TestApp::new();
    let today = fixed_now().date_naive();

    for i in 0..10 {
        approved_article(&app, &format!("Pendiente {i}")).await;
    }
    assert_eq!(publish(&app, "Primera").await, today);
}

/// 同時に掲載しても当日号は 5 本を超えない
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_publishes_respect_the_quota() {
    let app = TestApp::new();
    let today = fixed_now().date_naive();
    let tomorrow = today.checked_add_days(Days::new(1)).unwrap();

    let mut ids = Vec::new();
    for i in 0..6 {
        ids.push(approved_article(&app, &format!("Concurrente {i}")).await.id);
    }

    let handles: Vec<_> = ids
        .into_iter()
        .map(|id| {
            let services = Arc::clone(&app.services);
            tokio::spawn(async move {
                services
                    .article_commands
                    .publish_article(&editor(), PublishArticleCommand { id })
                    .await
            })
        })
        .collect();

    let mut dates = Vec::new();
    for handle in handles {
        let published = handle.await.unwrap().unwrap();
        dates.push(published.issue_date.unwrap());
    }

    assert_eq!(dates.iter().filter(|d| **d == today).count(), 5);
    assert_eq!(dates.iter().filter(|d| **d == tomorrow).count(), 1);
}
