//! 应答模式数据模型
//!
//! 类别名 → (有序匹配规则, 候选应答, 可选追问)。表的插入顺序即兜底扫描顺序，
//! 另有一个固定的优先类别列表先于整表扫描。

use regex::Regex;

use crate::error::{AppError, Result};

/// 类别的静态定义
#[derive(Debug, Clone, Copy)]
pub struct CategorySpec {
    pub name: &'static str,
    pub patterns: &'static [&'static str],
    pub responses: &'static [&'static str],
    pub follow_up: Option<&'static str>,
}

/// 编译后的应答类别
#[derive(Debug, Clone)]
pub struct PatternCategory {
    /// 类别名称
    pub name: String,

    /// 匹配规则（按顺序求值）
    pub rules: Vec<Regex>,

    /// 候选应答模板
    pub responses: Vec<String>,

    /// 命中后追加的追问
    pub follow_up: Option<String>,
}

impl PatternCategory {
    /// 编译类别定义
    pub fn compile(spec: &CategorySpec) -> Result<Self> {
        if spec.responses.is_empty() {
            return Err(AppError::Config(format!(
                "category '{}' has no responses",
                spec.name
            )));
        }

        let rules = spec
            .patterns
            .iter()
            .map(|p| Regex::new(p))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self {
            name: spec.name.to_string(),
            rules,
            responses: spec.responses.iter().map(|r| r.to_string()).collect(),
            follow_up: spec.follow_up.map(str::to_string),
        })
    }

    /// 是否包含匹配任意输入的规则
    pub fn is_catch_all(&self) -> bool {
        self.rules.iter().any(|rule| rule.is_match(""))
    }
}

/// 应答模式表
#[derive(Debug, Clone)]
pub struct PatternTable {
    categories: Vec<PatternCategory>,
    priority: Vec<usize>,
    remainder: Vec<usize>,
}

impl PatternTable {
    /// 由类别定义和优先列表构建
    ///
    /// 优先列表中的名字必须存在；兜底类别必须位于扫描顺序的最后。
    pub fn build(specs: &[CategorySpec], priority: &[&str]) -> Result<Self> {
        let categories = specs
            .iter()
            .map(PatternCategory::compile)
            .collect::<Result<Vec<_>>>()?;

        let mut priority_idx = Vec::with_capacity(priority.len());
        for name in priority {
            let idx = categories
                .iter()
                .position(|c| c.name == *name)
                .ok_or_else(|| AppError::Config(format!("unknown priority category '{}'", name)))?;
            if !priority_idx.contains(&idx) {
                priority_idx.push(idx);
            }
        }

        let remainder: Vec<usize> = (0..categories.len())
            .filter(|idx| !priority_idx.contains(idx))
            .collect();

        let table = Self {
            categories,
            priority: priority_idx,
            remainder,
        };
        table.check_catch_all_last()?;
        Ok(table)
    }

    fn check_catch_all_last(&self) -> Result<()> {
        let order: Vec<usize> = self.scan_indices().collect();
        for (pos, idx) in order.iter().enumerate() {
            let category = &self.categories[*idx];
            if category.is_catch_all() && pos + 1 != order.len() {
                return Err(AppError::Config(format!(
                    "catch-all category '{}' must be scanned last",
                    category.name
                )));
            }
        }
        Ok(())
    }

    fn scan_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.priority.iter().chain(self.remainder.iter()).copied()
    }

    /// 扫描顺序：优先类别，然后其余类别（表顺序）
    pub fn scan_order(&self) -> impl Iterator<Item = &PatternCategory> {
        self.scan_indices().map(|idx| &self.categories[idx])
    }

    /// 优先类别名称
    pub fn priority_names(&self) -> Vec<&str> {
        self.priority
            .iter()
            .map(|idx| self.categories[*idx].name.as_str())
            .collect()
    }

    /// 其余类别名称（表顺序）
    pub fn remainder_names(&self) -> Vec<&str> {
        self.remainder
            .iter()
            .map(|idx| self.categories[*idx].name.as_str())
            .collect()
    }

    /// 按名称查找类别
    pub fn get(&self, name: &str) -> Option<&PatternCategory> {
        self.categories.iter().find(|c| c.name == name)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
