//! Request Orchestration
//!
//! One [`Processor`] serves the single request type: given
//! (owner, repository, network), produce the repository's contract
//! manifest. Per request it
//!
//! 1. resolves the network (unknown names fail fast),
//! 2. collects documentation files (extension alone decides),
//! 3. builds the address map from manifest, documentation and registry,
//! 4. classifies every Cadence file, swapping contract contents for the
//!    canonical on-chain source where the address is known, rewriting
//!    imports and extracting parameters for executables,
//! 5. assembles the four sequences in search order.
//!
//! Only a failed file enumeration or an unresolvable network aborts;
//! every other failure is attached to the file it concerns.

use std::sync::Arc;

use tracing::{info, warn};

use crate::cadence::{
    CadenceFrontend, DeclarationParser, DeclarationRole, FileKind, classify, extract_arguments,
    rewrite_imports,
};
use crate::chain::{AccountReader, Network};
use crate::constants::repo::{DOCUMENT_EXTENSION, SOURCE_EXTENSION};
use crate::metrics::{MetricsSink, NullSink};
use crate::provider::{ContentProvider, SearchHit};
use crate::resolver;
use crate::types::{
    AddressMap, DeployedFile, ExecutableFile, File, FileType, ProcessResult, Result,
};

/// The orchestrator. Stateless; collaborators are shared across requests.
pub struct Processor {
    provider: Arc<dyn ContentProvider>,
    chain: Arc<dyn AccountReader>,
    parser: Arc<dyn DeclarationParser>,
    metrics: Arc<dyn MetricsSink>,
}

impl Processor {
    pub fn new(provider: Arc<dyn ContentProvider>, chain: Arc<dyn AccountReader>) -> Self {
        Self {
            provider,
            chain,
            parser: Arc::new(CadenceFrontend::new()),
            metrics: Arc::new(NullSink),
        }
    }

    pub fn with_parser(mut self, parser: Arc<dyn DeclarationParser>) -> Self {
        self.parser = parser;
        self
    }

    pub fn with_metrics(mut self, metrics: Arc<dyn MetricsSink>) -> Self {
        self.metrics = metrics;
        self
    }

    /// Process one repository snapshot. Pure with respect to caching: an
    /// enclosing layer is responsible for fingerprint-based deduplication.
    pub async fn process(&self, owner: &str, repo: &str, network: &str) -> Result<ProcessResult> {
        let network = Network::parse(network)?;
        self.metrics.request_started(owner, repo, network);
        info!(
            repo = %format!("{owner}/{repo}"),
            network = %network,
            "processing repository"
        );

        let documents = self.process_documents(owner, repo).await?;

        let contracts_map = resolver::build_address_map(
            self.provider.as_ref(),
            self.chain.as_ref(),
            owner,
            repo,
            network,
            &documents,
        )
        .await;

        let (contracts, scripts, transactions) = self
            .process_sources(owner, repo, network, &contracts_map)
            .await?;

        Ok(ProcessResult {
            documents,
            contracts,
            scripts,
            transactions,
        })
    }

    /// Every documentation-extension file becomes a Document record,
    /// no classification involved.
    async fn process_documents(&self, owner: &str, repo: &str) -> Result<Vec<File>> {
        let hits = self.provider.search(owner, repo, DOCUMENT_EXTENSION).await?;

        let mut documents = Vec::with_capacity(hits.len());
        for hit in hits {
            let mut file = File::new(FileType::Document, hit.path, hit.filename);
            match self.provider.get(owner, repo, &file.path).await {
                Ok(bytes) => file.contents = String::from_utf8_lossy(&bytes).into_owned(),
                Err(error) => file.errors.push(error.to_string()),
            }
            self.metrics.file_processed(FileType::Document);
            documents.push(file);
        }
        Ok(documents)
    }

    async fn process_sources(
        &self,
        owner: &str,
        repo: &str,
        network: Network,
        contracts_map: &AddressMap,
    ) -> Result<(Vec<DeployedFile>, Vec<ExecutableFile>, Vec<ExecutableFile>)> {
        let hits = self.provider.search(owner, repo, SOURCE_EXTENSION).await?;

        let mut contracts = Vec::new();
        let mut scripts = Vec::new();
        let mut transactions = Vec::new();

        for hit in hits {
            let source = match self.provider.get(owner, repo, &hit.path).await {
                Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
                Err(error) => {
                    warn!(
                        repo = %format!("{owner}/{repo}"),
                        file = %hit.path,
                        error = %error,
                        "unable to read source file"
                    );
                    continue;
                }
            };

            match classify(&source) {
                Some(FileKind::Contract { name }) => {
                    let record = self
                        .contract_record(owner, repo, hit, source, &name, network, contracts_map)
                        .await;
                    contracts.push(record);
                }
                Some(FileKind::Transaction) => {
                    let record = self.executable_record(
                        owner,
                        repo,
                        hit,
                        source,
                        DeclarationRole::Transaction,
                        contracts_map,
                    );
                    transactions.push(record);
                }
                Some(FileKind::Script) => {
                    let record = self.executable_record(
                        owner,
                        repo,
                        hit,
                        source,
                        DeclarationRole::Script,
                        contracts_map,
                    );
                    scripts.push(record);
                }
                None => {}
            }
        }

        Ok((contracts, scripts, transactions))
    }

    /// A contract whose name resolved gets its contents replaced by the
    /// canonical on-chain source; lookup failures keep the repository
    /// copy and record the error. Contracts are never import-rewritten.
    #[allow(clippy::too_many_arguments)]
    async fn contract_record(
        &self,
        owner: &str,
        repo: &str,
        hit: SearchHit,
        source: String,
        name: &str,
        network: Network,
        contracts_map: &AddressMap,
    ) -> DeployedFile {
        let mut file =
            File::new(FileType::Contract, hit.path, hit.filename).with_contents(source);
        let address = contracts_map.get(name).cloned();

        if let Some(address) = &address {
            match self.chain.get_account(network, address).await {
                Ok(deployed) => match deployed.get(name) {
                    Some(bytes) => file.contents = String::from_utf8_lossy(bytes).into_owned(),
                    None => file
                        .errors
                        .push(format!("contract {name} is not deployed at 0x{address}")),
                },
                Err(error) => file.errors.push(error.to_string()),
            }
        }

        self.log_file_errors(owner, repo, &file);
        self.metrics.file_processed(FileType::Contract);
        DeployedFile {
            file,
            address,
            network,
        }
    }

    fn executable_record(
        &self,
        owner: &str,
        repo: &str,
        hit: SearchHit,
        source: String,
        role: DeclarationRole,
        contracts_map: &AddressMap,
    ) -> ExecutableFile {
        let file_type = match role {
            DeclarationRole::Transaction => FileType::Transaction,
            DeclarationRole::Script => FileType::Script,
        };
        let mut file = File::new(file_type, hit.path, hit.filename);

        let outcome = rewrite_imports(&source, contracts_map);
        for _ in &outcome.errors {
            self.metrics.import_unresolved();
        }
        file.errors.extend(outcome.errors);
        file.contents = outcome.contents;

        // Parameters are extracted from the original text, not the
        // rewritten form.
        let arguments = match extract_arguments(self.parser.as_ref(), &source, role) {
            Ok(arguments) => arguments,
            Err(failure) => {
                file.errors.push(failure.to_string());
                Vec::new()
            }
        };

        self.log_file_errors(owner, repo, &file);
        self.metrics.file_processed(file_type);
        ExecutableFile { file, arguments }
    }

    fn log_file_errors(&self, owner: &str, repo: &str, file: &File) {
        for error in &file.errors {
            info!(
                repo = %format!("{owner}/{repo}"),
                file = %file.path,
                error = %error,
                "unable to process file"
            );
        }
    }
}
