//! 监控统计模型。实时推送的每条消息是稀疏的部分状态补丁，
//! 消费端必须按键合并而不是整体替换。推送通道本身不在本库范围内。

use serde::{Deserialize, Serialize};

/// 面向前端的运行统计汇总
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitorStat {
    pub number_of_tasks: i32,
    pub failed_scans: i32,
    pub queued_scans: i32,
    pub running_scans: i32,
    pub finished_scans: i32,
    pub results_found: i32,
}

/// 一条推送消息：任意键的子集，缺席的键不改变现状
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitorPatch {
    pub number_of_tasks: Option<i32>,
    pub failed_scans: Option<i32>,
    pub queued_scans: Option<i32>,
    pub running_scans: Option<i32>,
    pub finished_scans: Option<i32>,
    pub results_found: Option<i32>,
}

impl MonitorStat {
    /// 只合并补丁里出现的键
    pub fn apply(&mut self, patch: &MonitorPatch) {
        if let Some(v) = patch.number_of_tasks {
            self.number_of_tasks = v;
        }
        if let Some(v) = patch.failed_scans {
            self.failed_scans = v;
        }
        if let Some(v) = patch.queued_scans {
            self.queued_scans = v;
        }
        if let Some(v) = patch.running_scans {
            self.running_scans = v;
        }
        if let Some(v) = patch.finished_scans {
            self.finished_scans = v;
        }
        if let Some(v) = patch.results_found {
            self.results_found = v;
        }
    }
}
