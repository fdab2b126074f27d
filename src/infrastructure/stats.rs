use crate::domain::{launcher::StatsProbe, models::SystemStats};
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::Mutex;

// Without a previous sample the counters only give the average since boot.
const FIRST_SAMPLE_GAP: Duration = Duration::from_millis(200);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuTimes {
    pub idle: u64,
    pub total: u64,
}

/// Samples `/proc` for CPU and memory and `df` for the root filesystem.
pub struct ProcStatsProbe {
    proc_root: PathBuf,
    previous: Mutex<Option<CpuTimes>>,
}

impl Default for ProcStatsProbe {
    fn default() -> Self {
        Self::new("/proc")
    }
}

impl ProcStatsProbe {
    pub fn new(proc_root: impl Into<PathBuf>) -> Self {
        Self {
            proc_root: proc_root.into(),
            previous: Mutex::new(None),
        }
    }

    async fn cpu_times(&self) -> Result<CpuTimes> {
        let stat = tokio::fs::read_to_string(self.proc_root.join("stat"))
            .await
            .context("reading /proc/stat")?;
        parse_cpu_times(&stat).ok_or_else(|| anyhow!("no cpu line in stat"))
    }

    async fn cpu_percent(&self) -> Result<f32> {
        let mut previous = self.previous.lock().await;
        let baseline = match *previous {
            Some(times) => times,
            None => {
                let first = self.cpu_times().await?;
                tokio::time::sleep(FIRST_SAMPLE_GAP).await;
                first
            }
        };
        let current = self.cpu_times().await?;
        *previous = Some(current);
        Ok(cpu_usage(baseline, current))
    }

    async fn memory_mb(&self) -> Result<(u64, u64)> {
        let meminfo = tokio::fs::read_to_string(self.proc_root.join("meminfo"))
            .await
            .context("reading /proc/meminfo")?;
        parse_meminfo(&meminfo).ok_or_else(|| anyhow!("meminfo lacks MemTotal/MemAvailable"))
    }
}

async fn root_disk_usage() -> Result<(u64, u64)> {
    let output = tokio::process::Command::new("df")
        .args(["-Pk", "/"])
        .output()
        .await
        .context("running df")?;
    if !output.status.success() {
        return Err(anyhow!("df exited with {}", output.status));
    }
    parse_df(&String::from_utf8_lossy(&output.stdout)).ok_or_else(|| anyhow!("unexpected df output"))
}

pub fn parse_cpu_times(stat: &str) -> Option<CpuTimes> {
    let line = stat.lines().find(|l| l.starts_with("cpu "))?;
    let fields: Vec<u64> = line
        .split_whitespace()
        .skip(1)
        .filter_map(|f| f.parse().ok())
        .collect();
    if fields.len() < 4 {
        return None;
    }
    // idle + iowait
    let idle = fields[3] + fields.get(4).copied().unwrap_or(0);
    Some(CpuTimes {
        idle,
        total: fields.iter().sum(),
    })
}

pub fn cpu_usage(previous: CpuTimes, current: CpuTimes) -> f32 {
    let total = current.total.saturating_sub(previous.total);
    if total == 0 {
        return 0.0;
    }
    let idle = current.idle.saturating_sub(previous.idle);
    (1.0 - idle as f32 / total as f32) * 100.0
}

/// Returns `(used_mb, total_mb)`.
pub fn parse_meminfo(meminfo: &str) -> Option<(u64, u64)> {
    let field = |key: &str| -> Option<u64> {
        meminfo
            .lines()
            .find_map(|l| l.strip_prefix(key))
            .and_then(|rest| rest.split_whitespace().next())
            .and_then(|v| v.parse::<u64>().ok())
    };
    let total = field("MemTotal:")?;
    let available = field("MemAvailable:")?;
    Some((total.saturating_sub(available) / 1024, total / 1024))
}

/// Returns `(used_kib, total_kib)` from POSIX `df -Pk` output.
pub fn parse_df(output: &str) -> Option<(u64, u64)> {
    let line = output.lines().nth(1)?;
    let mut fields = line.split_whitespace().skip(1);
    let total = fields.next()?.parse().ok()?;
    let used = fields.next()?.parse().ok()?;
    Some((used, total))
}

pub fn human_kib(kib: u64) -> String {
    const UNITS: [&str; 4] = ["K", "M", "G", "T"];
    let mut value = kib as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.1}{}", UNITS[unit])
}

#[async_trait]
impl StatsProbe for ProcStatsProbe {
    async fn sample(&self) -> Result<SystemStats> {
        let cpu_percent = self.cpu_percent().await?;
        let (mem_used_mb, mem_total_mb) = self.memory_mb().await?;
        let (disk_used, disk_total) = match root_disk_usage().await {
            Ok((used, total)) => (human_kib(used), human_kib(total)),
            Err(e) => {
                tracing::debug!("disk usage unavailable: {e}");
                ("?".to_string(), "?".to_string())
            }
        };

        Ok(SystemStats {
            cpu_percent,
            mem_used_mb,
            mem_total_mb,
            disk_used,
            disk_total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cpu_usage_between_samples() {
        let a = parse_cpu_times("cpu  100 0 100 800 0 0 0 0 0 0\ncpu0 1 2 3 4\n").unwrap();
        let b = parse_cpu_times("cpu  150 0 150 900 0 0 0 0 0 0\n").unwrap();
        assert_eq!(a.total, 1000);
        assert!((cpu_usage(a, b) - 50.0).abs() < 0.01);
        assert_eq!(cpu_usage(b, b), 0.0);
    }

    #[test]
    fn test_meminfo() {
        let info = "MemTotal:       16384000 kB\nMemFree:   1000 kB\nMemAvailable:    8192000 kB\n";
        assert_eq!(parse_meminfo(info), Some((8000, 16000)));
        assert_eq!(parse_meminfo("MemTotal: 1 kB\n"), None);
    }

    #[test]
    fn test_df_output() {
        let out = "Filesystem     1024-blocks      Used Available Capacity Mounted on\n\
                   /dev/nvme0n1p2   488245288 123456789 340000000      27% /\n";
        assert_eq!(parse_df(out), Some((123_456_789, 488_245_288)));
        assert_eq!(human_kib(2048), "2.0M");
    }

    #[tokio::test]
    async fn test_probe_reads_proc_root() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("stat"), "cpu  10 0 10 80 0 0 0 0\n").unwrap();
        std::fs::write(
            dir.path().join("meminfo"),
            "MemTotal: 2048 kB\nMemAvailable: 1024 kB\n",
        )
        .unwrap();

        let probe = ProcStatsProbe::new(dir.path());
        let stats = probe.sample().await.unwrap();
        assert_eq!(stats.cpu_percent, 0.0);
        assert_eq!((stats.mem_used_mb, stats.mem_total_mb), (1, 2));

        std::fs::write(dir.path().join("stat"), "cpu  30 0 10 100 0 0 0 0\n").unwrap();
        let stats = probe.sample().await.unwrap();
        assert!((stats.cpu_percent - 50.0).abs() < 0.01);
    }

    #[tokio::test]
    async fn test_first_sample_measures_current_load() {
        let dir = tempfile::tempdir().unwrap();
        let stat = dir.path().join("stat");
        // 20% busy on average since boot.
        std::fs::write(&stat, "cpu  10 0 10 80 0 0 0 0\n").unwrap();
        std::fs::write(
            dir.path().join("meminfo"),
            "MemTotal: 2048 kB\nMemAvailable: 1024 kB\n",
        )
        .unwrap();

        let busy = tokio::spawn({
            let stat = stat.clone();
            async move {
                tokio::time::sleep(FIRST_SAMPLE_GAP / 4).await;
                std::fs::write(&stat, "cpu  100 0 10 90 0 0 0 0\n").unwrap();
            }
        });

        let probe = ProcStatsProbe::new(dir.path());
        let stats = probe.sample().await.unwrap();
        busy.await.unwrap();
        assert!((stats.cpu_percent - 90.0).abs() < 0.01);
    }
}
