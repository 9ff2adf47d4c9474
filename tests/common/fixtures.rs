//! Static vocabulary corpora used across harnesses.

use std::path::{Path, PathBuf};

use vocab_core::config::Config;

/// Level-tagged sections with `<word> <pos>` lines, preceded by a title.
///
/// 16 lines: 8 entries, 3 headers, 3 blank, 2 skipped.
pub const CORPUS_LEVEL_LIST: &str = "\
學測英文 6000 字

第一級
a/an art.
able adj.
he (him, his, himself) pron.
ice cream n.

第二級
agree(ment) v.
don't aux.
級別說明
T-shirt n.

第三級
record n./v.
";

/// Tab-delimited rows in `level, word, pos, display, translation` order,
/// with a header row, a short row and an unreadable level.
pub const CORPUS_TAB: &str = "\
級別\t單字\t屬性\t輸出\t中文
1\ta/an\tart.\ta/an (art.)\t一個/一個
1\tapple\tn.
2\table\tadj.\table (adj.)\t能夠的
第三級\tact\tv.\tact (v.)\t行動
?\tadd\tv.\tadd (v.)\t加
6\tzone\tn.\tzone (n.)\t地區
";

/// The same row shape split by commas, wide gaps, single spaces and tabs.
pub const CORPUS_MIXED_DELIMITERS: &str = "\
1,a/an,art.,a/an (art.),一個
2  able  adj.  able (adj.)  能夠的
3 act v. act(v.) 行動
4\tbench\tn.\tbench (n.)\t長椅
";

/// Spreadsheet export with English headers in a non-default order, a level
/// section row, a repeated header row and an empty row.
pub const CORPUS_CSV: &str = "\
Word,Level,Part of speech,Notes,Chinese
\"apple\",1,n.,,蘋果
第二級,,,,
bench,,n.,,長椅
a/an art.,1,,,一個
word,level,pos,notes,chinese
,,,,
";

/// Tab rows grouped under `第X級` section headers.
pub const CORPUS_SECTIONED_TAB: &str = "\
第一級
1\ta/an\tart.\ta/an (art.)\t一個
1\table\tadj.\table (adj.)\t能夠的

第二級
2\tagree\tv.\tagree (v.)\t同意
";

/// Spreadsheet export with no header row; one translation holds a comma.
pub const CORPUS_HEADERLESS_CSV: &str = "\
1,a/an,art.,a/an (art.),一個
1,able,adj.,able (adj.),能夠的
3,run,v.,run (v.),\"跑,經營\"
";

/// Write `content` to `dir/name` and return the path.
pub fn write_fixture(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("fixture must be writable");
    path
}

/// Built-in defaults with discovery pointed at `dir`.
pub fn config_in(dir: &Path) -> Config {
    let mut cfg = Config::defaults();
    cfg.input.search_dir = dir.to_path_buf();
    cfg
}
