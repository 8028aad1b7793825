#![allow(clippy::expect_used)]

use rs_v2ex::{extract, Document};

const RECENT_PAGE: &str = r#"
<html><body>
<div id="Wrapper"><div id="Main">
  <div class="box">
    <div class="cell"><span class="fade">V2EX 提问指南 · 共 12345 个主题</span></div>
    <div class="cell item">
      <table><tr>
        <td><a href="/member/alice"><img src="//cdn.v2ex.com/avatar/alice.png" class="avatar"></a></td>
        <td>
          <span class="item_title">
            <a href="/t/1000001#reply42" class="topic-link">如何优雅地解析 HTML</a>
          </span>
          <span class="topic_info">
            <div class="votes">3</div>
            <a class="node" href="/go/programmer">程序员</a> &nbsp;•&nbsp;
            <strong><a href="/member/alice">alice</a></strong> &nbsp;•&nbsp;
            14 小时前 &nbsp;•&nbsp;
            最后回复来自 <strong><a href="/member/bob">bob</a></strong>
          </span>
        </td>
        <td><a href="/t/1000001#reply42" class="count_livid">42</a></td>
      </tr></table>
    </div>
    <div class="cell item">
      <table><tr>
        <td><a href="/member/carol"><img src="//cdn.v2ex.com/avatar/carol.png" class="avatar"></a></td>
        <td>
          <span class="item_title">
            <a href="/t/1000002" class="topic-link">第一个没人回复的主题</a>
          </span>
          <span class="topic_info">
            <div class="votes"></div>
            <a class="node" href="/go/qna">问与答</a> &nbsp;•&nbsp;
            <strong><a href="/member/carol">carol</a></strong> &nbsp;•&nbsp;
            21 分钟前
          </span>
        </td>
      </tr></table>
    </div>
  </div>
  <div class="inner">
    <a class="page_normal" href="?p=2">2</a>
    <a class="page_normal" href="?p=3">3</a>
  </div>
</div></div>
</body></html>
"#;

#[test]
fn recent_feed_extracts_items_and_pagination() {
    let doc = Document::from(RECENT_PAGE);
    let list = extract::topic::parse_recent_feed(&doc, 0);

    assert_eq!(list.topics.len(), 2);
    assert_eq!(list.total, 12345);
    assert_eq!(list.page, 0);
    assert_eq!(list.page_max, 3);
}

#[test]
fn topic_with_replies_reads_reply_author_and_preceding_publish() {
    let doc = Document::from(RECENT_PAGE);
    let list = extract::topic::parse_recent_feed(&doc, 0);
    let topic = &list.topics[0];

    assert_eq!(topic.title, "如何优雅地解析 HTML");
    assert_eq!(topic.link, "https://www.v2ex.com/t/1000001#reply42");
    assert_eq!(topic.author, "alice");
    assert_eq!(topic.author_url, "https://www.v2ex.com/member/alice");
    assert_eq!(topic.avatar, "https://cdn.v2ex.com/avatar/alice.png");
    assert_eq!(topic.votes, 3);
    assert_eq!(topic.comments, 42);
    assert_eq!(topic.node, "程序员");
    assert_eq!(topic.node_url, "https://www.v2ex.com/go/programmer");
    assert_eq!(topic.reply.as_deref(), Some("bob"));
    assert_eq!(topic.publish, "14小时前");
    assert!(topic.publish_time.is_some());
}

#[test]
fn topic_without_replies_takes_trailing_publish_token() {
    let doc = Document::from(RECENT_PAGE);
    let list = extract::topic::parse_recent_feed(&doc, 0);
    let topic = &list.topics[1];

    assert_eq!(topic.reply, None);
    assert_eq!(topic.publish, "21分钟前");
    assert!(topic.publish_time.is_some());

    // Empty badges degrade to zero, not errors.
    assert_eq!(topic.votes, 0);
    assert_eq!(topic.comments, 0);
}

#[test]
fn page_argument_is_recorded_as_supplied() {
    let doc = Document::from(RECENT_PAGE);
    let list = extract::topic::parse_recent_feed(&doc, 2);
    assert_eq!(list.page, 2);
}

const NODE_PAGE: &str = r#"
<html><body>
<div id="Wrapper"><div id="Main">
  <div class="node_header">
    <div class="fr f12"><strong>688</strong> 个主题</div>
    <div class="node_avatar"><img src="//cdn.v2ex.com/navatar/programmer.png"></div>
    <div class="node_info">
      <span class="f12">写程序的人。</span>
    </div>
  </div>
  <div id="TopicsNode">
    <div class="cell">
      <table><tr>
        <td><a href="/member/dave"><img src="//cdn.v2ex.com/avatar/dave.png" class="avatar"></a></td>
        <td>
          <span class="item_title"><a href="/t/1000003" class="topic-link">编译器的错误提示</a></span>
          <span class="topic_info">
            <strong><a href="/member/dave">dave</a></strong> &nbsp;•&nbsp;
            2 天前 &nbsp;•&nbsp;
            最后回复来自 <strong><a href="/member/erin">erin</a></strong>
          </span>
        </td>
      </tr></table>
    </div>
  </div>
</div></div>
</body></html>
"#;

#[test]
fn node_feed_reads_bio_banner_and_total() {
    let doc = Document::from(NODE_PAGE);
    let list = extract::topic::parse_node_feed(&doc, 0);

    assert_eq!(list.topics.len(), 1);
    assert_eq!(list.total, 688);
    assert_eq!(list.node_bio, "写程序的人。");
    assert_eq!(list.node_img, "https://cdn.v2ex.com/navatar/programmer.png");

    // No pagination strip on a single-page feed, but the invariant holds.
    assert_eq!(list.page_max, 1);

    let topic = &list.topics[0];
    assert_eq!(topic.publish, "2天前");
    assert_eq!(topic.reply.as_deref(), Some("erin"));
}

const HOT_TOPICS: &str = r#"
<html><body>
<div id="TopicsHot">
  <div class="cell">
    <table><tr>
      <td><a href="/member/frank"><img src="//cdn.v2ex.com/avatar/frank.png" class="avatar"></a></td>
      <td><span class="item_hot_topic_title"><a href="/t/1000004">今天大家都在用什么键盘</a></span></td>
    </tr></table>
  </div>
  <div class="cell">
    <table><tr>
      <td><a href="/member/grace"><img src="//cdn.v2ex.com/avatar/grace.png" class="avatar"></a></td>
      <td><span class="item_hot_topic_title"><a href="/t/1000005">裸辞三个月后的近况</a></span></td>
    </tr></table>
  </div>
</div>
</body></html>
"#;

#[test]
fn hot_topics_read_title_author_avatar_only() {
    let doc = Document::from(HOT_TOPICS);
    let topics: Vec<_> = doc
        .select("#TopicsHot table")
        .iter()
        .map(|s| extract::topic::parse_hot_topic(&s))
        .collect();

    assert_eq!(topics.len(), 2);

    assert_eq!(topics[0].title, "今天大家都在用什么键盘");
    assert_eq!(topics[0].link, "https://www.v2ex.com/t/1000004");
    assert_eq!(topics[0].author, "frank");
    assert_eq!(topics[0].author_url, "https://www.v2ex.com/member/frank");
    assert_eq!(topics[0].avatar, "https://cdn.v2ex.com/avatar/frank.png");

    // The dense layout has no counters or publish line.
    assert_eq!(topics[0].votes, 0);
    assert_eq!(topics[0].comments, 0);
    assert_eq!(topics[0].publish, "");
    assert!(topics[0].publish_time.is_none());

    assert_eq!(topics[1].author, "grace");
}
