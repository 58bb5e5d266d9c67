// ==========================================
// 饮品服务计算器 - 表单来源 Trait
// ==========================================
// 职责: 定义表单字段读取接口（表单渲染属于外部系统）
// ==========================================

use crate::domain::form::RawForm;
use crate::importer::error::{FormError, FormResult};

// ==========================================
// FormSource Trait
// ==========================================
// 实现者: PairsFormSource（内存中的字段序列）、命令行参数
pub trait FormSource: Send + Sync {
    /// 读取原始表单字段
    fn read_form(&self) -> FormResult<RawForm>;
}

impl FormSource for RawForm {
    fn read_form(&self) -> FormResult<RawForm> {
        Ok(self.clone())
    }
}

// ==========================================
// PairsFormSource - 字段序列
// ==========================================
/// 与浏览器表单序列化结果一致的 (name, value) 序列
#[derive(Debug, Clone, Default)]
pub struct PairsFormSource {
    pairs: Vec<(String, String)>,
}

impl PairsFormSource {
    pub fn new<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            pairs: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// 解析 `name=value` 形式的参数
    ///
    /// 没有 `=` 的参数视为勾选项（值为 `on`）
    pub fn from_args<I, S>(args: I) -> FormResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut pairs = Vec::new();
        for arg in args {
            let arg = arg.as_ref();
            match arg.split_once('=') {
                Some((name, _)) if name.trim().is_empty() => {
                    return Err(FormError::SourceError(format!("字段名为空: {}", arg)));
                }
                Some((name, value)) => pairs.push((name.trim().to_string(), value.to_string())),
                None => pairs.push((arg.trim().to_string(), "on".to_string())),
            }
        }
        Ok(Self { pairs })
    }
}

impl FormSource for PairsFormSource {
    fn read_form(&self) -> FormResult<RawForm> {
        Ok(RawForm::from_pairs(self.pairs.iter().cloned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_addons_accumulate() {
        let source = PairsFormSource::new([
            ("guests", "10"),
            ("addons[]", "Creamer"),
            ("addons[]", "Sugar"),
            ("guests", "12"),
        ]);
        let form = source.read_form().unwrap();
        assert_eq!(form.get("guests"), Some("12"));
        assert_eq!(form.addons, vec!["Creamer".to_string(), "Sugar".to_string()]);
    }

    #[test]
    fn test_from_args() {
        let source = PairsFormSource::from_args(["guests=20", "hotTea", "notes=a=b"]).unwrap();
        let form = source.read_form().unwrap();
        assert_eq!(form.get("hotTea"), Some("on"));
        assert_eq!(form.get("notes"), Some("a=b"));
        assert!(PairsFormSource::from_args(["=5"]).is_err());
    }
}
