//! CSV output of the service trace
//!
//! One row per serviced request, in service order, showing where the head came
//! from and what the request cost. Useful for plotting head movement or
//! checking a policy's ordering by hand.

use crate::scheduler::ServiceRecord;
use crate::workload::Workload;
use crate::Result;
use anyhow::Context;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

const HEADER: &str = "step,request,platter,cylinder,sector,length,from_cylinder,from_sector,service_ms,response_ms";

/// CSV writer for service traces
pub struct TraceWriter<W: Write> {
    out: W,
}

impl TraceWriter<BufWriter<File>> {
    /// Create a trace file and write the header row
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("Failed to create trace file: {}", path.display()))?;
        Self::new(BufWriter::new(file))
    }
}

impl<W: Write> TraceWriter<W> {
    /// Wrap a writer and write the header row
    pub fn new(mut out: W) -> Result<Self> {
        writeln!(out, "{}", HEADER)?;
        Ok(Self { out })
    }

    /// Append one serviced request
    pub fn append(&mut self, workload: &Workload, record: &ServiceRecord) -> Result<()> {
        let request = &workload[record.index];
        writeln!(
            self.out,
            "{},{},{},{},{},{},{},{},{:.6},{:.6}",
            record.step,
            record.index,
            request.platter,
            request.cylinder,
            request.sector,
            request.length,
            record.from_cylinder,
            record.from_sector,
            record.service_ms,
            record.response_ms
        )?;
        Ok(())
    }

    /// Flush and hand back the underlying writer
    pub fn finish(mut self) -> Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}

/// Write a complete trace to `path`
pub fn write_trace(path: &Path, workload: &Workload, trace: &[ServiceRecord]) -> Result<()> {
    let mut writer = TraceWriter::create(path)?;
    for record in trace {
        writer.append(workload, record)?;
    }
    writer.finish()?;
    Ok(())
}
