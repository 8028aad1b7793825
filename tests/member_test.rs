#![allow(clippy::expect_used)]

use rs_v2ex::{extract, Document, Error};

const MEMBER_PAGE: &str = r#"
<html><body>
<div id="Wrapper"><div id="Main">
  <div class="box">
    <div class="cell">
      <img src="//cdn.v2ex.com/avatar/livid.png" class="avatar">
      <h1>livid</h1>
      <span class="bigger">Remember the bigger picture.</span>
      <strong class="online">ONLINE</strong>
      <span class="gray">V2EX 第 1 号会员，加入于 2010-04-04 10:16:36 +08:00 今日活跃度排名 123</span>
    </div>
  </div>
</div></div>
</body></html>
"#;

#[test]
fn member_summary_sentence_drives_the_record() {
    let doc = Document::from(MEMBER_PAGE);
    let member = extract::member::parse_member(&doc, "livid").expect("should extract");

    assert_eq!(member.name, "livid");
    assert_eq!(member.bio, "Remember the bigger picture.");
    assert_eq!(member.avatar, "https://cdn.v2ex.com/avatar/livid.png");
    assert_eq!(member.number, 1);
    assert_eq!(member.join, "2010-04-0410:16:36+08:00");
    assert_eq!(
        member
            .join_time
            .expect("join date should parse")
            .to_rfc3339(),
        "2010-04-04T10:16:36+08:00"
    );
    assert_eq!(member.rank, 123);
    assert!(member.online);
}

#[test]
fn offline_member_has_no_marker() {
    let html = MEMBER_PAGE.replace(r#"<strong class="online">ONLINE</strong>"#, "");
    let doc = Document::from(html);
    let member = extract::member::parse_member(&doc, "livid").expect("should extract");
    assert!(!member.online);
}

#[test]
fn missing_summary_sentence_fails_hard() {
    let html = r#"
        <div id="Main"><div class="box">
          <span class="gray">这里没有会员信息</span>
        </div></div>
    "#;
    let doc = Document::from(html);
    let result = extract::member::parse_member(&doc, "nobody");
    assert!(matches!(result, Err(Error::Structure(_))));
}

const HOME_SIDEBAR: &str = r#"
<html><body>
<div id="Rightbar">
  <div class="box">
    <div class="cell">
      <table><tr>
        <td><a href="/member/alice"><img src="//cdn.v2ex.com/avatar/alice.png" class="avatar"></a></td>
        <td><span class="bigger"><a href="/member/alice">alice</a></span></td>
      </tr></table>
    </div>
    <div class="cell">
      <a href="/my/nodes"><span class="bigger">9</span> 节点收藏</a>
      <a href="/my/topics"><span class="bigger">31</span> 主题收藏</a>
      <a href="/my/following"><span class="bigger">7</span> 特别关注</a>
    </div>
    <div class="inner">
      <a href="/notifications" class="fade">3 条未读提醒</a>
    </div>
    <div class="cell">
      <a href="/balance" class="balance_area">
        <img src="/static/img/gold@2x.png"> 2
        <img src="/static/img/silver@2x.png"> 15
        <img src="/static/img/bronze@2x.png"> 60
      </a>
    </div>
  </div>
  <div class="box">stats</div>
</div>
</body></html>
"#;

#[test]
fn profile_reads_the_viewer_sidebar() {
    let doc = Document::from(HOME_SIDEBAR);
    let profile = extract::member::parse_profile(&doc).expect("should extract");

    assert_eq!(profile.username, "alice");
    assert_eq!(profile.url, "https://www.v2ex.com/member/alice");
    assert_eq!(profile.avatar, "https://cdn.v2ex.com/avatar/alice.png");
    assert_eq!(profile.notifications, 3);

    assert_eq!(profile.balance.gold, 2);
    assert_eq!(profile.balance.silver, 15);
    assert_eq!(profile.balance.bronze, 60);

    // All three counters share the first badge position.
    assert_eq!(profile.fav_nodes, 9);
    assert_eq!(profile.fav_topics, 9);
    assert_eq!(profile.following, 9);
}
