//! 分页状态（当前页 + 跳页输入框）

/// 分页状态
///
/// 不变量：`current_page >= 1`。
/// 每个导航操作都返回当前页是否发生变化，只有变化才会触发抓取。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    /// 当前页（从 1 开始）
    current_page: u32,
    /// 跳页输入框中的原始文本（提交前可以是任意字符串）
    pending_input: String,
}

impl PageState {
    /// 创建新的分页状态（第 1 页）
    pub fn new() -> Self {
        Self {
            current_page: 1,
            pending_input: "1".to_string(),
        }
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    /// 是否还能向前翻页
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    /// 上一页：`max(current - 1, 1)`
    pub fn go_to_previous(&mut self) -> bool {
        self.set_page(self.current_page.saturating_sub(1))
    }

    /// 下一页（没有上限，服务端不返回总页数）
    pub fn go_to_next(&mut self) -> bool {
        self.set_page(self.current_page.saturating_add(1))
    }

    /// 直接跳转到第 `page` 页（页码按钮）
    pub fn go_to_page(&mut self, page: u32) -> bool {
        self.set_page(page)
    }

    /// 输入框追加字符
    pub fn push_char(&mut self, c: char) {
        self.pending_input.push(c);
    }

    /// 输入框删除最后一个字符
    pub fn pop_char(&mut self) {
        self.pending_input.pop();
    }

    /// 清空输入框（开始新的输入）
    pub fn clear_input(&mut self) {
        self.pending_input.clear();
    }

    /// 放弃编辑，输入框恢复为当前页
    pub fn discard_input(&mut self) {
        self.sync_input();
    }

    /// 提交输入框
    ///
    /// 解析失败或小于 1 时丢弃编辑、恢复为当前页，不报错。
    pub fn commit_input(&mut self) -> bool {
        match parse_page(&self.pending_input) {
            Some(page) => self.set_page(page),
            None => {
                self.sync_input();
                false
            }
        }
    }

    fn set_page(&mut self, page: u32) -> bool {
        let page = page.max(1);
        let changed = page != self.current_page;
        self.current_page = page;
        self.sync_input();
        changed
    }

    fn sync_input(&mut self) {
        self.pending_input = self.current_page.to_string();
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new()
    }
}

/// 解析跳页输入：十进制正整数，允许首尾空白
fn parse_page(input: &str) -> Option<u32> {
    input.trim().parse::<u32>().ok().filter(|&page| page >= 1)
}
